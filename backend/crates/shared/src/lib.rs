//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of gateway vocabulary:
//! - Common error types, the uniform error envelope and result aliases
//! - The backend response envelope and pagination contract
//! - Opaque, backend-owned identifiers
//!
//! **Design Principle**: Only include things that every route crate
//! interprets the same way.

pub mod error {
    pub mod app_error;
    #[cfg(feature = "axum")]
    pub mod conversions;
    pub mod kind;
}
pub mod envelope;
pub mod id;
pub mod pagination;
