//! Auth (Authentication) Gateway Module
//!
//! Layered structure:
//! - `application/` - Use cases around the single backend call, cookie manager
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Sign-in / sign-up / OTP verification forwarded to the backend
//! - Session cookies: `accessToken` (15 min) and `refreshToken` (7 days)
//! - Logout that clears cookies only once the backend confirms
//! - Access token refresh and a local session status check
//!
//! ## Security Model
//! - Both cookies are HttpOnly, `SameSite=Strict`, `Path=/`
//! - `Secure` is set in production only
//! - The gateway never inspects tokens; the backend owns them

pub mod application;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
