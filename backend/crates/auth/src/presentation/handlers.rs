//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{AppendHeaders, IntoResponse, Response};
use platform::BackendApi;
use platform::client::Forwarded;
use platform::relay::Relayed;
use serde_json::Value;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::sign_in::SIGN_IN_FAILED;
use crate::application::{
    ForwardUseCase, RefreshUseCase, SessionTokens, SignInUseCase, SignOutUseCase, endpoints,
};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::SessionStatusResponse;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<B>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    pub backend: Arc<B>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign In / Sign Up / OTP
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<B>(
    State(state): State<AuthAppState<B>>,
    forwarded: Forwarded,
    credentials: Result<Json<Value>, JsonRejection>,
) -> AuthResult<Response>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    let Json(credentials) = credentials.map_err(AuthError::invalid_body(SIGN_IN_FAILED))?;

    let use_case = SignInUseCase::new(state.backend.clone(), state.config.clone());
    let output = use_case
        .execute(&credentials, forwarded.into_headers())
        .await?;

    Ok(with_cookies(output.cookies, output.relayed))
}

/// POST /api/auth/signup
pub async fn sign_up<B>(
    State(state): State<AuthAppState<B>>,
    forwarded: Forwarded,
    body: Result<Json<Value>, JsonRejection>,
) -> AuthResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    const FAILURE: &str = "Failed to sign up";
    let Json(body) = body.map_err(AuthError::invalid_body(FAILURE))?;

    ForwardUseCase::new(state.backend.clone())
        .execute(endpoints::SIGN_UP, FAILURE, &body, forwarded.into_headers())
        .await
}

/// POST /api/auth/verify-otp
pub async fn verify_otp<B>(
    State(state): State<AuthAppState<B>>,
    forwarded: Forwarded,
    body: Result<Json<Value>, JsonRejection>,
) -> AuthResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    const FAILURE: &str = "Failed to verify OTP";
    let Json(body) = body.map_err(AuthError::invalid_body(FAILURE))?;

    ForwardUseCase::new(state.backend.clone())
        .execute(endpoints::VERIFY_OTP, FAILURE, &body, forwarded.into_headers())
        .await
}

// ============================================================================
// Logout / Refresh
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<B>(
    State(state): State<AuthAppState<B>>,
    headers: HeaderMap,
    forwarded: Forwarded,
) -> AuthResult<Response>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    let tokens = SessionTokens::from_request(&state.config, &headers);

    let use_case = SignOutUseCase::new(state.backend.clone(), state.config.clone());
    let output = use_case
        .execute(tokens.refresh_token.as_deref(), forwarded.into_headers())
        .await?;

    Ok(with_cookies(output.cookies, output.relayed))
}

/// POST /api/auth/refresh
pub async fn refresh<B>(
    State(state): State<AuthAppState<B>>,
    headers: HeaderMap,
    forwarded: Forwarded,
) -> AuthResult<Response>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    let tokens = SessionTokens::from_request(&state.config, &headers);

    let use_case = RefreshUseCase::new(state.backend.clone(), state.config.clone());
    let output = use_case
        .execute(tokens.refresh_token.as_deref(), forwarded.into_headers())
        .await?;

    Ok(with_cookies(output.cookies, output.relayed))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/session
pub async fn session_status<B>(
    State(state): State<AuthAppState<B>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    let tokens = SessionTokens::from_request(&state.config, &headers);

    Json(SessionStatusResponse {
        authenticated: tokens.is_authenticated(),
        has_access_token: tokens.access_token.is_some(),
        has_refresh_token: tokens.refresh_token.is_some(),
    })
}

// ============================================================================
// Helper Functions
// ============================================================================

fn with_cookies(cookies: Vec<HeaderValue>, relayed: Relayed) -> Response {
    let set_cookies = cookies
        .into_iter()
        .map(|cookie| (header::SET_COOKIE, cookie));

    (AppendHeaders(set_cookies), relayed).into_response()
}
