//! Application Layer
//!
//! Use cases wrapping the single backend call behind each auth route.

pub mod config;
pub mod cookies;
pub mod forward;
pub mod refresh;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use config::AuthConfig;
pub use cookies::SessionTokens;
pub use forward::ForwardUseCase;
pub use refresh::RefreshUseCase;
pub use sign_in::{SignInOutput, SignInUseCase};
pub use sign_out::{SignOutOutput, SignOutUseCase};

/// Backend endpoints the auth routes forward to
pub mod endpoints {
    pub const SIGN_IN: &str = "/auth/signin";
    pub const SIGN_UP: &str = "/auth/signup";
    pub const VERIFY_OTP: &str = "/auth/verify-otp";
    pub const LOGOUT: &str = "/auth/logout";
    pub const REFRESH: &str = "/auth/refresh-token";
}
