//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use platform::{BackendApi, HttpBackendClient};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the HTTP backend client
pub fn auth_router(backend: Arc<HttpBackendClient>, config: AuthConfig) -> Router {
    auth_router_generic(backend, config)
}

/// Create a generic Auth router for any backend implementation
pub fn auth_router_generic<B>(backend: Arc<B>, config: AuthConfig) -> Router
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        backend,
        config: Arc::new(config),
    };

    Router::new()
        .route("/signin", post(handlers::sign_in::<B>))
        .route("/signup", post(handlers::sign_up::<B>))
        .route("/verify-otp", post(handlers::verify_otp::<B>))
        .route("/logout", post(handlers::logout::<B>))
        .route("/refresh", post(handlers::refresh::<B>))
        .route("/session", get(handlers::session_status::<B>))
        .with_state(state)
}
