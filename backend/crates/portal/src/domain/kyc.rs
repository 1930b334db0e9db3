//! KYC Record Model

use chrono::{DateTime, Utc};
use kernel::id::{KycId, UserId};
use serde::{Deserialize, Serialize};

/// Review state of an identity verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: KycId,
    #[serde(alias = "userId")]
    pub user: Option<UserId>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub status: KycStatus,
    pub remarks: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl KycRecord {
    #[inline]
    pub fn is_verified(&self) -> bool {
        self.status == KycStatus::Verified
    }
}
