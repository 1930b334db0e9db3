//! News Model
//!
//! A published article as listed by `/news/get` and returned by
//! `/news/detail`. Counters default to zero when the backend omits them.

use chrono::{DateTime, Utc};
use kernel::id::{NewsId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::category::CategoryRef;

/// Editorial state of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsStatus {
    Draft,
    #[default]
    Published,
    Archived,
    #[serde(other)]
    Unknown,
}

impl NewsStatus {
    /// Only published articles are shown to readers
    #[inline]
    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Published)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: NewsId,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub parent_category: Option<CategoryRef>,
    pub sub_category: Option<CategoryRef>,
    pub author: Option<UserId>,
    #[serde(default)]
    pub status: NewsStatus,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    #[serde(default)]
    pub views: u64,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl NewsItem {
    /// Name of the parent category, when the backend populated it
    pub fn parent_category_name(&self) -> Option<&str> {
        self.parent_category.as_ref().and_then(CategoryRef::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_item_defaults() {
        let item: NewsItem = serde_json::from_value(json!({
            "_id": "n1",
            "title": "Bitcoin hits new high",
            "slug": "bitcoin-hits-new-high"
        }))
        .unwrap();

        assert_eq!(item.id.as_str(), "n1");
        assert_eq!(item.status, NewsStatus::Published);
        assert!(item.status.is_visible());
        assert_eq!(item.likes_count, 0);
        assert_eq!(item.parent_category_name(), None);
    }

    #[test]
    fn test_populated_categories_and_timestamps() {
        let item: NewsItem = serde_json::from_value(json!({
            "_id": "n2",
            "title": "Rates",
            "slug": "rates",
            "status": "draft",
            "parentCategory": { "_id": "c1", "name": "crypto" },
            "subCategory": "c9",
            "likesCount": 4,
            "publishedAt": "2024-05-02T08:30:00Z"
        }))
        .unwrap();

        assert_eq!(item.parent_category_name(), Some("crypto"));
        assert_eq!(item.sub_category.as_ref().map(|c| c.id().as_str()), Some("c9"));
        assert!(!item.status.is_visible());
        assert_eq!(item.likes_count, 4);
        assert!(item.published_at.is_some());
    }

    #[test]
    fn test_unknown_status() {
        let item: NewsItem = serde_json::from_value(json!({
            "_id": "n3", "title": "t", "slug": "s", "status": "scheduled"
        }))
        .unwrap();
        assert_eq!(item.status, NewsStatus::Unknown);
    }
}
