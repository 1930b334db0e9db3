//! Session Cookie Manager
//!
//! Turns backend-issued tokens into Set-Cookie headers and back.

use axum::http::{HeaderMap, HeaderValue};
use kernel::envelope::Envelope;
use platform::cookie::{delete_cookie_header, extract_cookie, set_cookie_header};
use serde_json::Value;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Tokens the browser currently holds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl SessionTokens {
    pub fn from_request(config: &AuthConfig, headers: &HeaderMap) -> Self {
        Self {
            access_token: extract_cookie(headers, &config.access_cookie_name),
            refresh_token: extract_cookie(headers, &config.refresh_cookie_name),
        }
    }

    /// Tokens present in a backend body, under `data` or at the top level
    pub fn from_backend(body: &Value) -> Self {
        let envelope = Envelope::new(body);
        Self {
            access_token: envelope.payload_str("accessToken").map(str::to_owned),
            refresh_token: envelope.payload_str("refreshToken").map(str::to_owned),
        }
    }

    /// Absence of either token means unauthenticated.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.refresh_token.is_some()
    }
}

/// Set-Cookie headers for every token present
pub fn issue(config: &AuthConfig, tokens: &SessionTokens) -> AuthResult<Vec<HeaderValue>> {
    let pairs = [
        (config.access_cookie(), tokens.access_token.as_deref()),
        (config.refresh_cookie(), tokens.refresh_token.as_deref()),
    ];

    pairs
        .iter()
        .filter_map(|(cookie, token)| token.map(|t| (cookie, t)))
        .map(|(cookie, token)| {
            set_cookie_header(cookie, token).map_err(|_| AuthError::UnstorableToken)
        })
        .collect()
}

/// Set-Cookie headers expiring both tokens immediately
pub fn clear(config: &AuthConfig) -> Vec<HeaderValue> {
    [config.access_cookie(), config.refresh_cookie()]
        .iter()
        .filter_map(|cookie| delete_cookie_header(cookie).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use serde_json::json;

    #[test]
    fn test_from_backend_reads_data_first() {
        let body = json!({
            "status": true,
            "data": { "accessToken": "a1", "refreshToken": "r1" },
            "accessToken": "ignored"
        });
        let tokens = SessionTokens::from_backend(&body);
        assert_eq!(tokens.access_token.as_deref(), Some("a1"));
        assert_eq!(tokens.refresh_token.as_deref(), Some("r1"));
    }

    #[test]
    fn test_issue_only_present_tokens() {
        let config = AuthConfig::development();
        let tokens = SessionTokens {
            access_token: Some("a".into()),
            refresh_token: None,
        };
        let cookies = issue(&config, &tokens).unwrap();
        assert_eq!(cookies.len(), 1);
        assert!(cookies[0].to_str().unwrap().starts_with("accessToken=a;"));
    }

    #[test]
    fn test_issue_rejects_unstorable_token() {
        let config = AuthConfig::development();
        let tokens = SessionTokens {
            access_token: Some("line\nbreak".into()),
            refresh_token: None,
        };
        assert!(matches!(
            issue(&config, &tokens),
            Err(AuthError::UnstorableToken)
        ));
    }

    #[test]
    fn test_clear_expires_both() {
        let cookies = clear(&AuthConfig::default());
        assert_eq!(cookies.len(), 2);
        for cookie in &cookies {
            assert!(cookie.to_str().unwrap().contains("Max-Age=0"));
        }
    }

    #[test]
    fn test_from_request() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("accessToken=a; refreshToken=r"),
        );
        let tokens = SessionTokens::from_request(&AuthConfig::default(), &headers);
        assert!(tokens.is_authenticated());

        let tokens = SessionTokens::from_request(&AuthConfig::default(), &HeaderMap::new());
        assert!(!tokens.is_authenticated());
    }
}
