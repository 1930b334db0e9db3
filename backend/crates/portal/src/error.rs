//! Portal Error Types
//!
//! Portal-specific error variants that render through
//! `kernel::error::AppError`.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use platform::BackendError;
use thiserror::Error;

/// Portal-specific result type alias
pub type PortalResult<T> = Result<T, PortalError>;

#[derive(Debug, Error)]
pub enum PortalError {
    /// The single backend call failed; `context` is the route's fixed message
    #[error("{context}: {source}")]
    Backend {
        context: &'static str,
        #[source]
        source: BackendError,
    },

    /// Query parameters failed validation (already a 400 `AppError`)
    #[error(transparent)]
    InvalidQuery(#[from] AppError),

    /// Request body was not a JSON document; `context` is the route's fixed message
    #[error("{context}: {detail}")]
    InvalidBody {
        context: &'static str,
        detail: String,
    },

    /// Request was not a readable multipart form
    #[error("Invalid multipart form: {0}")]
    Multipart(String),
}

impl PortalError {
    pub fn backend(context: &'static str) -> impl FnOnce(BackendError) -> Self {
        move |source| PortalError::Backend { context, source }
    }

    pub fn invalid_body(context: &'static str) -> impl FnOnce(JsonRejection) -> Self {
        move |rejection| PortalError::InvalidBody {
            context,
            detail: rejection.body_text(),
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            PortalError::Backend { context, source } => source.to_app_error(context),
            PortalError::InvalidQuery(err) => err,
            PortalError::InvalidBody { context, detail } => {
                AppError::bad_request(context).with_detail(detail)
            }
            PortalError::Multipart(detail) => {
                AppError::bad_request("Invalid multipart form").with_detail(detail)
            }
        }
    }

    fn log(&self) {
        match self {
            PortalError::Backend { context, source } => {
                tracing::warn!(context = %context, error = %source, "Portal request failed");
            }
            PortalError::InvalidQuery(err) => {
                tracing::debug!(error = %err, "Rejected query parameters");
            }
            PortalError::InvalidBody { context, detail } => {
                tracing::debug!(context = %context, detail = %detail, "Rejected request body");
            }
            PortalError::Multipart(detail) => {
                tracing::debug!(detail = %detail, "Rejected multipart form");
            }
        }
    }
}

impl From<MultipartError> for PortalError {
    fn from(err: MultipartError) -> Self {
        PortalError::Multipart(err.body_text())
    }
}

impl From<MultipartRejection> for PortalError {
    fn from(rejection: MultipartRejection) -> Self {
        PortalError::Multipart(rejection.body_text())
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
