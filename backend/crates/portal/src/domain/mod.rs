//! Domain Layer
//!
//! Read-only shapes of the records the backend serves. The gateway relays
//! bodies verbatim; these types document and check the contract.

pub mod category;
pub mod investment;
pub mod kyc;
pub mod news;
pub mod transaction;

// Re-exports
pub use category::{Category, CategoryRef, CategoryStatus};
pub use investment::{Investment, InvestmentStatus};
pub use kyc::{KycRecord, KycStatus};
pub use news::{NewsItem, NewsStatus};
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
