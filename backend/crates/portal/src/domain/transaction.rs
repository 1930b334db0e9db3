//! Wallet Transaction Model
//!
//! Deposits and withdrawals waiting on (or past) admin approval.
//! `/wallet/approvals` lists them; `/wallet/approve` and `/wallet/reject`
//! move a pending one to its final state.

use chrono::{DateTime, Utc};
use kernel::id::{TransactionId, UserId};
use serde::{Deserialize, Serialize};

// ============================================================================
// TransactionKind
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Investment,
    Return,
    #[serde(other)]
    Unknown,
}

// ============================================================================
// TransactionStatus
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl TransactionStatus {
    /// Still waiting on an admin decision
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Approved and rejected transactions cannot change again
    #[inline]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

// ============================================================================
// Transaction
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id", alias = "id")]
    pub id: TransactionId,
    #[serde(alias = "userId")]
    pub user: Option<UserId>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub currency: Option<String>,
    #[serde(default)]
    pub status: TransactionStatus,
    pub reference: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pending_deposit() {
        let tx: Transaction = serde_json::from_value(json!({
            "_id": "t1",
            "userId": "u1",
            "type": "deposit",
            "amount": 250.5,
            "currency": "USDT",
            "status": "pending",
            "createdAt": "2024-06-01T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(tx.kind, TransactionKind::Deposit);
        assert_eq!(tx.user.as_ref().map(|u| u.as_str()), Some("u1"));
        assert!(tx.status.is_pending());
        assert!(!tx.status.is_final());
    }

    #[test]
    fn test_final_states() {
        assert!(TransactionStatus::Approved.is_final());
        assert!(TransactionStatus::Rejected.is_final());
        assert!(!TransactionStatus::Unknown.is_final());
    }

    #[test]
    fn test_unknown_kind_and_status() {
        let tx: Transaction = serde_json::from_value(json!({
            "_id": "t2",
            "type": "bonus",
            "amount": 1,
            "status": "on_hold"
        }))
        .unwrap();
        assert_eq!(tx.kind, TransactionKind::Unknown);
        assert_eq!(tx.status, TransactionStatus::Unknown);
    }
}
