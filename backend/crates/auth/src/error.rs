//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use platform::BackendError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// The single backend call failed; `context` is the route's fixed message
    #[error("{context}: {source}")]
    Backend {
        context: &'static str,
        #[source]
        source: BackendError,
    },

    /// Request body was not a JSON document
    #[error("{context}: {detail}")]
    InvalidBody {
        context: &'static str,
        detail: String,
    },

    /// No refresh token cookie on the request
    #[error("No refresh token found")]
    MissingRefreshToken,

    /// Backend issued a token that cannot be written into a cookie
    #[error("Backend issued a token that is not a valid cookie value")]
    UnstorableToken,
}

impl AuthError {
    pub fn backend(context: &'static str) -> impl FnOnce(BackendError) -> Self {
        move |source| AuthError::Backend { context, source }
    }

    pub fn invalid_body(context: &'static str) -> impl FnOnce(JsonRejection) -> Self {
        move |rejection| AuthError::InvalidBody {
            context,
            detail: rejection.body_text(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Backend { context, source } => source.to_app_error(context),
            AuthError::InvalidBody { context, detail } => {
                AppError::bad_request(*context).with_detail(detail.clone())
            }
            AuthError::MissingRefreshToken => AppError::unauthorized(self.to_string()),
            AuthError::UnstorableToken => {
                AppError::bad_gateway("Failed to store session").with_detail(self.to_string())
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            // The backend client already logged the call itself.
            AuthError::Backend { context, source } => {
                tracing::warn!(context = %context, error = %source, "Auth request failed");
            }
            AuthError::UnstorableToken => {
                tracing::error!("Backend token rejected as cookie value");
            }
            AuthError::InvalidBody { context, detail } => {
                tracing::debug!(context = %context, detail = %detail, "Rejected request body");
            }
            AuthError::MissingRefreshToken => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
