//! Response Relay
//!
//! Turns a decoded backend body into the browser-facing response:
//! - no nested `data` payload → body verbatim, `200 OK`
//! - nested `data` payload → body verbatim, status = envelope `statusCode`
//!
//! A payload-bearing body without a usable `statusCode` is an upstream
//! contract violation.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::envelope::Envelope;
use serde_json::Value;

use crate::backend::BackendError;

/// Status the browser should see for this backend body
pub fn relay_status(endpoint: &str, body: &Value) -> Result<StatusCode, BackendError> {
    let envelope = Envelope::new(body);
    if !envelope.has_payload() {
        return Ok(StatusCode::OK);
    }

    let code = envelope
        .declared_status()
        .map_err(|e| contract_violation(endpoint, e.to_string()))?;

    StatusCode::from_u16(code).map_err(|e| contract_violation(endpoint, e.to_string()))
}

fn contract_violation(endpoint: &str, message: String) -> BackendError {
    let err = BackendError::Contract {
        endpoint: endpoint.to_string(),
        message,
    };
    tracing::error!(endpoint = %endpoint, error = %err, "Backend envelope rejected");
    err
}

/// Relayed backend body with its resolved status
#[derive(Debug, Clone, PartialEq)]
pub struct Relayed {
    pub status: StatusCode,
    pub body: Value,
}

impl Relayed {
    pub fn from_backend(endpoint: &str, body: Value) -> Result<Self, BackendError> {
        let status = relay_status(endpoint, &body)?;
        Ok(Self { status, body })
    }
}

impl IntoResponse for Relayed {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
