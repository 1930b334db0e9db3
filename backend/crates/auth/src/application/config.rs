//! Application Configuration
//!
//! Session cookie policy for the auth routes.

use std::time::Duration;

use platform::cookie::{ACCESS_TOKEN_COOKIE, CookieConfig, REFRESH_TOKEN_COOKIE};

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Access token cookie name
    pub access_cookie_name: String,
    /// Refresh token cookie name
    pub refresh_cookie_name: String,
    /// Access token cookie lifetime (15 minutes)
    pub access_token_ttl: Duration,
    /// Refresh token cookie lifetime (7 days)
    pub refresh_token_ttl: Duration,
    /// Whether to mark cookies Secure (production only)
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_cookie_name: ACCESS_TOKEN_COOKIE.to_string(),
            refresh_cookie_name: REFRESH_TOKEN_COOKIE.to_string(),
            access_token_ttl: Duration::from_secs(15 * 60),
            refresh_token_ttl: Duration::from_secs(7 * 24 * 3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::default()
        }
    }

    /// Pick the production or development profile from an `APP_ENV` value
    pub fn for_environment(app_env: Option<&str>) -> Self {
        match app_env.map(|env| env.trim().to_ascii_lowercase()) {
            Some(env) if env == "production" => Self::default(),
            _ => Self::development(),
        }
    }

    pub fn access_cookie(&self) -> CookieConfig {
        self.cookie(&self.access_cookie_name, self.access_token_ttl)
    }

    pub fn refresh_cookie(&self) -> CookieConfig {
        self.cookie(&self.refresh_cookie_name, self.refresh_token_ttl)
    }

    fn cookie(&self, name: &str, ttl: Duration) -> CookieConfig {
        CookieConfig {
            same_site: self.cookie_same_site,
            ..CookieConfig::new(name, ttl.as_secs(), self.cookie_secure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls() {
        let config = AuthConfig::default();
        assert_eq!(config.access_cookie().max_age_secs, Some(900));
        assert_eq!(config.refresh_cookie().max_age_secs, Some(604800));
        assert!(config.access_cookie().secure);
    }

    #[test]
    fn test_for_environment() {
        assert!(AuthConfig::for_environment(Some("production")).cookie_secure);
        assert!(AuthConfig::for_environment(Some(" Production ")).cookie_secure);
        assert!(!AuthConfig::for_environment(Some("development")).cookie_secure);
        assert!(!AuthConfig::for_environment(None).cookie_secure);
    }
}
