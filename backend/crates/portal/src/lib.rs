//! Portal Gateway Module
//!
//! Layered structure:
//! - `domain/` - Read-only record shapes (news, categories, wallet, KYC, investments)
//! - `application/` - Backend route table, query builder, relay use case
//! - `presentation/` - HTTP handlers, query DTOs, multipart rebuilder, router
//!
//! ## Features
//! - Profile update and profile-picture upload
//! - Category and news listing, news detail
//! - Comments, likes and consultations
//! - Wallet approval queue with approve / reject actions
//!
//! The access token cookie, when present, travels upstream as a Bearer
//! token. Authorization decisions stay with the backend.

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use error::{PortalError, PortalResult};
pub use presentation::router::{portal_router, portal_router_generic};

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
