//! Presentation Layer
//!
//! HTTP handlers, query DTOs, and the portal router.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod upload;

// Re-exports
pub use handlers::PortalAppState;
pub use router::{portal_router, portal_router_generic};
