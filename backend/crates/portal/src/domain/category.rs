//! Category Model

use chrono::{DateTime, Utc};
use kernel::id::CategoryId;
use serde::{Deserialize, Serialize};

/// Category visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    #[default]
    Active,
    Inactive,
    /// Any status this gateway does not know yet
    #[serde(other)]
    Unknown,
}

/// News category. Sub-categories point at their parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: CategoryId,
    pub name: String,
    pub slug: Option<String>,
    pub parent_category: Option<CategoryId>,
    #[serde(default)]
    pub status: CategoryStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    #[inline]
    pub fn is_parent(&self) -> bool {
        self.parent_category.is_none()
    }
}

/// A category reference inside another record: bare id or populated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(CategoryId),
    Populated(Box<Category>),
}

impl CategoryRef {
    pub fn id(&self) -> &CategoryId {
        match self {
            CategoryRef::Id(id) => id,
            CategoryRef::Populated(category) => &category.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            CategoryRef::Id(_) => None,
            CategoryRef::Populated(category) => Some(&category.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parent_and_sub_category() {
        let parent: Category = serde_json::from_value(json!({
            "_id": "c1",
            "name": "Crypto",
            "slug": "crypto",
            "createdAt": "2024-03-01T10:00:00.000Z"
        }))
        .unwrap();
        assert!(parent.is_parent());
        assert_eq!(parent.status, CategoryStatus::Active);

        let sub: Category = serde_json::from_value(json!({
            "id": "c2",
            "name": "DeFi",
            "parentCategory": "c1",
            "status": "inactive"
        }))
        .unwrap();
        assert!(!sub.is_parent());
        assert_eq!(sub.status, CategoryStatus::Inactive);
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let category: Category =
            serde_json::from_value(json!({ "_id": "c3", "name": "X", "status": "archived" }))
                .unwrap();
        assert_eq!(category.status, CategoryStatus::Unknown);
    }

    #[test]
    fn test_category_ref_forms() {
        let bare: CategoryRef = serde_json::from_value(json!("c1")).unwrap();
        assert_eq!(bare.id().as_str(), "c1");
        assert_eq!(bare.name(), None);

        let populated: CategoryRef =
            serde_json::from_value(json!({ "_id": "c1", "name": "Crypto" })).unwrap();
        assert_eq!(populated.id().as_str(), "c1");
        assert_eq!(populated.name(), Some("Crypto"));
    }
}
