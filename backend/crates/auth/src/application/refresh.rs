//! Refresh Use Case
//!
//! Trades the refresh token cookie for a new access token.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::BackendApi;
use platform::relay::Relayed;
use serde_json::json;

use crate::application::config::AuthConfig;
use crate::application::cookies::{self, SessionTokens};
use crate::application::endpoints;
use crate::application::sign_in::SignInOutput;
use crate::error::{AuthError, AuthResult};

pub const REFRESH_FAILED: &str = "Failed to refresh session";

pub struct RefreshUseCase<B>
where
    B: BackendApi,
{
    backend: Arc<B>,
    config: Arc<AuthConfig>,
}

impl<B> RefreshUseCase<B>
where
    B: BackendApi,
{
    pub fn new(backend: Arc<B>, config: Arc<AuthConfig>) -> Self {
        Self { backend, config }
    }

    /// Missing refresh cookie fails before any backend call.
    pub async fn execute(
        &self,
        refresh_token: Option<&str>,
        headers: Option<HeaderMap>,
    ) -> AuthResult<SignInOutput> {
        let refresh_token = refresh_token.ok_or(AuthError::MissingRefreshToken)?;

        let reply = self
            .backend
            .post(endpoints::REFRESH, &json!({ "refreshToken": refresh_token }), headers)
            .await
            .map_err(AuthError::backend(REFRESH_FAILED))?;

        // A rotated refresh token is stored too when the backend returns one.
        let tokens = SessionTokens::from_backend(&reply);
        let cookies = cookies::issue(&self.config, &tokens)?;
        let relayed =
            Relayed::from_backend(endpoints::REFRESH, reply).map_err(AuthError::backend(REFRESH_FAILED))?;

        tracing::debug!(
            rotated = tokens.refresh_token.is_some(),
            "Session refreshed"
        );

        Ok(SignInOutput { relayed, cookies })
    }
}
