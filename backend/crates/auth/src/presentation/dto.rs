//! API DTOs (Data Transfer Objects)
//!
//! Request bodies are forwarded as raw JSON; only the locally answered
//! session status has a typed shape.

use serde::Serialize;

/// Session status response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    /// Both session cookies are present
    pub authenticated: bool,
    pub has_access_token: bool,
    pub has_refresh_token: bool,
}
