//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the gateway's shared technical foundations:
//! - Backend API client (`BackendApi` trait, reqwest implementation)
//! - Multipart body model for forwarded uploads
//! - Response relay (backend envelope → HTTP response)
//! - Cookie management
//! - Client identification and forwarded headers

pub mod backend;
pub mod client;
pub mod config;
pub mod cookie;
pub mod multipart;
pub mod relay;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use backend::{BackendApi, BackendError, BackendResult, HttpBackendClient, LocalBackendApi};
pub use config::BackendConfig;
pub use multipart::{MultipartBody, MultipartField};
