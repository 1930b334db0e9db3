//! Sign In Use Case
//!
//! Forwards credentials and turns the issued tokens into session cookies.

use std::sync::Arc;

use axum::http::{HeaderMap, HeaderValue};
use platform::BackendApi;
use platform::relay::Relayed;
use serde_json::Value;

use crate::application::config::AuthConfig;
use crate::application::cookies::{self, SessionTokens};
use crate::application::endpoints;
use crate::error::{AuthError, AuthResult};

pub const SIGN_IN_FAILED: &str = "Failed to sign in";

/// Sign in output
pub struct SignInOutput {
    pub relayed: Relayed,
    /// Set-Cookie values, one per token the backend issued
    pub cookies: Vec<HeaderValue>,
}

/// Sign in use case
pub struct SignInUseCase<B>
where
    B: BackendApi,
{
    backend: Arc<B>,
    config: Arc<AuthConfig>,
}

impl<B> SignInUseCase<B>
where
    B: BackendApi,
{
    pub fn new(backend: Arc<B>, config: Arc<AuthConfig>) -> Self {
        Self { backend, config }
    }

    pub async fn execute(
        &self,
        credentials: &Value,
        headers: Option<HeaderMap>,
    ) -> AuthResult<SignInOutput> {
        let reply = self
            .backend
            .post(endpoints::SIGN_IN, credentials, headers)
            .await
            .map_err(AuthError::backend(SIGN_IN_FAILED))?;

        let tokens = SessionTokens::from_backend(&reply);
        let cookies = cookies::issue(&self.config, &tokens)?;
        let relayed =
            Relayed::from_backend(endpoints::SIGN_IN, reply).map_err(AuthError::backend(SIGN_IN_FAILED))?;

        if tokens.is_authenticated() {
            tracing::info!("User signed in");
        } else {
            tracing::debug!(
                access = tokens.access_token.is_some(),
                refresh = tokens.refresh_token.is_some(),
                "Sign-in answered without a full token pair"
            );
        }

        Ok(SignInOutput { relayed, cookies })
    }
}
