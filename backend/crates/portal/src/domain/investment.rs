//! Investment Model
//!
//! Returns are computed by the backend; this shape only carries them.

use chrono::{DateTime, Utc};
use kernel::id::{InvestmentId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    #[serde(rename = "_id", alias = "id")]
    pub id: InvestmentId,
    #[serde(alias = "userId")]
    pub user: Option<UserId>,
    pub plan: Option<String>,
    pub amount: f64,
    pub expected_return: Option<f64>,
    #[serde(default)]
    pub status: InvestmentStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub matures_at: Option<DateTime<Utc>>,
}

impl Investment {
    /// Whether the maturity date has passed at `now`
    pub fn is_matured(&self, now: DateTime<Utc>) -> bool {
        self.matures_at.is_some_and(|at| at <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_maturity() {
        let investment: Investment = serde_json::from_value(json!({
            "_id": "i1",
            "user": "u1",
            "plan": "gold",
            "amount": 1000,
            "expectedReturn": 1120.0,
            "maturesAt": "2024-12-31T00:00:00Z"
        }))
        .unwrap();

        let before = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert!(!investment.is_matured(before));
        assert!(investment.is_matured(after));
        assert_eq!(investment.status, InvestmentStatus::Active);
    }

    #[test]
    fn test_no_maturity_date() {
        let investment: Investment = serde_json::from_value(json!({
            "_id": "i2", "amount": 5, "status": "paused"
        }))
        .unwrap();
        assert!(!investment.is_matured(Utc::now()));
        assert_eq!(investment.status, InvestmentStatus::Unknown);
    }
}
