//! Backend Client Configuration
//!
//! Where the backend service lives and how long the gateway waits for it.

use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors raised while building a [`BackendConfig`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid value for {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Backend client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL of the backend API, without trailing slash
    pub base_url: String,
    /// Whole-request timeout
    pub request_timeout: Duration,
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
    /// User-Agent sent upstream
    pub user_agent: String,
}

impl BackendConfig {
    /// Create a config with default timeouts.
    ///
    /// The URL must use `http://` or `https://`; trailing slashes are removed.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: format!("blog-gateway/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Build from environment variables.
    ///
    /// Required:
    /// - `BACKEND_API_URL`
    ///
    /// Optional:
    /// - `BACKEND_TIMEOUT_SECS`: default 10
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var("BACKEND_API_URL").map_err(|_| ConfigError::Missing("BACKEND_API_URL"))?;

        let mut config = Self::new(&base_url)?;
        config.request_timeout = Duration::from_secs(env_secs(
            "BACKEND_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?);
        config.connect_timeout = Duration::from_secs(env_secs(
            "BACKEND_CONNECT_TIMEOUT_SECS",
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?);
        Ok(config)
    }

    /// Absolute URL for a backend endpoint path.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(ConfigError::InvalidUrl("URL cannot be empty".into()));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::InvalidUrl(format!(
            "{url} must start with http:// or https://"
        )));
    }
    Ok(url.to_string())
}

fn env_secs(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidNumber { var, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slashes() {
        let config = BackendConfig::new("https://api.example.com/v1///").unwrap();
        assert_eq!(config.base_url, "https://api.example.com/v1");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_new_rejects_bad_urls() {
        assert!(matches!(
            BackendConfig::new(""),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            BackendConfig::new("ftp://example.com"),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_url_for_joins_single_slash() {
        let config = BackendConfig::new("http://localhost:8000/api").unwrap();
        assert_eq!(config.url_for("/news/get"), "http://localhost:8000/api/news/get");
        assert_eq!(config.url_for("news/get"), "http://localhost:8000/api/news/get");
    }

    #[test]
    fn test_env_secs_default_and_invalid() {
        assert_eq!(env_secs("__TEST_BACKEND_SECS_UNSET_913__", 7), Ok(7));

        let key = "__TEST_BACKEND_SECS_BAD_914__";
        unsafe { std::env::set_var(key, "soon") };
        assert!(matches!(
            env_secs(key, 7),
            Err(ConfigError::InvalidNumber { .. })
        ));
        unsafe { std::env::remove_var(key) };
    }
}
