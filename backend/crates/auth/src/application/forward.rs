//! Plain Forward Use Case
//!
//! Sign-up and OTP verification carry no cookie side effects: forward the
//! body and relay the answer.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::BackendApi;
use platform::relay::Relayed;
use serde_json::Value;

use crate::error::{AuthError, AuthResult};

pub struct ForwardUseCase<B>
where
    B: BackendApi,
{
    backend: Arc<B>,
}

impl<B> ForwardUseCase<B>
where
    B: BackendApi,
{
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    pub async fn execute(
        &self,
        endpoint: &'static str,
        context: &'static str,
        body: &Value,
        headers: Option<HeaderMap>,
    ) -> AuthResult<Relayed> {
        let reply = self
            .backend
            .post(endpoint, body, headers)
            .await
            .map_err(AuthError::backend(context))?;

        Relayed::from_backend(endpoint, reply).map_err(AuthError::backend(context))
    }
}
