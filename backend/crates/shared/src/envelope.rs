//! Backend Envelope
//!
//! The backend wraps its answers as `{ status, statusCode, message, data }`,
//! every field optional. The gateway reads this shape but never rewrites it.

use serde_json::Value;
use thiserror::Error;

/// The envelope claims a payload but its status code is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("envelope carries `data` but no `statusCode`")]
    MissingStatusCode,

    #[error("envelope `statusCode` {0} is not a valid HTTP status")]
    InvalidStatusCode(String),
}

/// Read-only view over a decoded backend body.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    body: &'a Value,
}

impl<'a> Envelope<'a> {
    pub fn new(body: &'a Value) -> Self {
        Self { body }
    }

    /// True when the body nests a non-null `data` payload.
    pub fn has_payload(&self) -> bool {
        self.body.get("data").is_some_and(|data| !data.is_null())
    }

    /// The backend-declared HTTP status, validated to 200..=599.
    ///
    /// Informational codes cannot carry a relayed body, so they are rejected too.
    pub fn declared_status(&self) -> Result<u16, EnvelopeError> {
        let raw = self
            .body
            .get("statusCode")
            .ok_or(EnvelopeError::MissingStatusCode)?;

        raw.as_u64()
            .and_then(|code| u16::try_from(code).ok())
            .filter(|code| (200..=599).contains(code))
            .ok_or_else(|| EnvelopeError::InvalidStatusCode(raw.to_string()))
    }

    /// Business-level success flag, evaluated with loose truthiness.
    pub fn is_success(&self) -> bool {
        self.body.get("status").is_some_and(truthy)
    }

    /// The backend's own explanation of a failure: `error`, then `message`.
    pub fn error_message(&self) -> Option<&'a str> {
        let body = self.body;
        body.get("error")
            .and_then(Value::as_str)
            .or_else(|| body.get("message").and_then(Value::as_str))
            .filter(|msg| !msg.is_empty())
    }

    /// A string field looked up under `data` first, then at the top level.
    pub fn payload_str(&self, key: &str) -> Option<&'a str> {
        let body = self.body;
        body.get("data")
            .and_then(|data| data.get(key))
            .and_then(Value::as_str)
            .or_else(|| body.get(key).and_then(Value::as_str))
            .filter(|value| !value.is_empty())
    }
}

/// Loose truthiness as the browser side understands it.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_has_payload() {
        assert!(Envelope::new(&json!({ "data": { "docs": [] } })).has_payload());
        assert!(Envelope::new(&json!({ "data": [] })).has_payload());
        assert!(!Envelope::new(&json!({ "data": null })).has_payload());
        assert!(!Envelope::new(&json!({ "status": true })).has_payload());
        assert!(!Envelope::new(&json!([1, 2, 3])).has_payload());
    }

    #[test]
    fn test_declared_status() {
        let body = json!({ "statusCode": 201, "data": {} });
        assert_eq!(Envelope::new(&body).declared_status(), Ok(201));

        let body = json!({ "data": {} });
        assert_eq!(
            Envelope::new(&body).declared_status(),
            Err(EnvelopeError::MissingStatusCode)
        );

        for bad in [json!(42), json!(101), json!(199), json!(600), json!("200"), json!(-1)] {
            let body = json!({ "statusCode": bad, "data": {} });
            assert!(matches!(
                Envelope::new(&body).declared_status(),
                Err(EnvelopeError::InvalidStatusCode(_))
            ));
        }
    }

    #[test]
    fn test_truthy() {
        assert!(truthy(&json!(true)));
        assert!(truthy(&json!(1)));
        assert!(truthy(&json!("ok")));
        assert!(truthy(&json!({})));
        assert!(!truthy(&json!(false)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&Value::Null));
    }

    #[test]
    fn test_error_message_prefers_error() {
        let body = json!({ "error": "Token expired", "message": "Unauthorized" });
        assert_eq!(Envelope::new(&body).error_message(), Some("Token expired"));

        let body = json!({ "message": "Unauthorized" });
        assert_eq!(Envelope::new(&body).error_message(), Some("Unauthorized"));

        let body = json!({ "error": { "code": 1 } });
        assert_eq!(Envelope::new(&body).error_message(), None);
    }

    #[test]
    fn test_payload_str() {
        let body = json!({ "data": { "accessToken": "a" }, "refreshToken": "r" });
        let envelope = Envelope::new(&body);
        assert_eq!(envelope.payload_str("accessToken"), Some("a"));
        assert_eq!(envelope.payload_str("refreshToken"), Some("r"));
        assert_eq!(envelope.payload_str("missing"), None);
    }
}
