//! Sign Out Use Case
//!
//! Asks the backend to invalidate the refresh token. Cookies are cleared
//! only when the backend confirms; on failure they are left as they were.

use std::sync::Arc;

use axum::http::{HeaderMap, HeaderValue};
use kernel::envelope::Envelope;
use platform::BackendApi;
use platform::relay::Relayed;
use serde_json::json;

use crate::application::config::AuthConfig;
use crate::application::cookies;
use crate::application::endpoints;
use crate::error::{AuthError, AuthResult};

pub const LOGOUT_FAILED: &str = "Failed to logout";

pub struct SignOutOutput {
    pub relayed: Relayed,
    /// Empty unless the backend confirmed the logout
    pub cookies: Vec<HeaderValue>,
}

/// Sign out use case
pub struct SignOutUseCase<B>
where
    B: BackendApi,
{
    backend: Arc<B>,
    config: Arc<AuthConfig>,
}

impl<B> SignOutUseCase<B>
where
    B: BackendApi,
{
    pub fn new(backend: Arc<B>, config: Arc<AuthConfig>) -> Self {
        Self { backend, config }
    }

    pub async fn execute(
        &self,
        refresh_token: Option<&str>,
        headers: Option<HeaderMap>,
    ) -> AuthResult<SignOutOutput> {
        let body = json!({ "refreshToken": refresh_token });

        let reply = self
            .backend
            .post(endpoints::LOGOUT, &body, headers)
            .await
            .map_err(AuthError::backend(LOGOUT_FAILED))?;

        let confirmed = Envelope::new(&reply).is_success();
        let relayed =
            Relayed::from_backend(endpoints::LOGOUT, reply).map_err(AuthError::backend(LOGOUT_FAILED))?;

        let cookies = if confirmed {
            tracing::info!("User signed out");
            cookies::clear(&self.config)
        } else {
            tracing::warn!("Backend declined logout, keeping session cookies");
            Vec::new()
        };

        Ok(SignOutOutput { relayed, cookies })
    }
}
