//! Application Configuration
//!
//! Where the API lives and where the bearer token is persisted.

use crate::error::ConfigError;

/// Local storage key holding the bearer token
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Route shown after sign-in and for unauthorized admin access
pub const DEFAULT_ROUTE: &str = "/dashboard";

/// Base used when nothing better is known (local development server)
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Absolute base URL, without trailing slash
    pub api_base_url: String,
    pub token_storage_key: String,
    pub default_route: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            token_storage_key: DEFAULT_TOKEN_KEY.to_string(),
            default_route: DEFAULT_ROUTE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(api_base_url.to_string()));
        }
        Ok(Self {
            api_base_url: trimmed.to_string(),
            token_storage_key: DEFAULT_TOKEN_KEY.to_string(),
            default_route: DEFAULT_ROUTE.to_string(),
        })
    }

    /// Pick the build-time override when present, else the page origin.
    pub fn resolve(override_base: Option<&str>, origin: &str) -> Result<Self, ConfigError> {
        match override_base.map(str::trim).filter(|s| !s.is_empty()) {
            Some(base) => Self::new(base),
            None => Self::new(origin),
        }
    }

    /// Join an absolute API path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::new("https://clinic.example/").unwrap();
        assert_eq!(config.api_base_url, "https://clinic.example");
        assert_eq!(config.endpoint("/api/auth/me"), "https://clinic.example/api/auth/me");
        assert_eq!(config.token_storage_key, "token");
    }

    #[test]
    fn test_relative_base_rejected() {
        assert_eq!(
            AppConfig::new("/api"),
            Err(ConfigError::InvalidBaseUrl("/api".to_string()))
        );
    }

    #[test]
    fn test_resolve_prefers_override() {
        let config = AppConfig::resolve(Some("http://localhost:4000"), "https://clinic.example").unwrap();
        assert_eq!(config.api_base_url, "http://localhost:4000");

        let config = AppConfig::resolve(Some("  "), "https://clinic.example").unwrap();
        assert_eq!(config.api_base_url, "https://clinic.example");
    }

    #[test]
    fn test_default_points_at_local_server() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint("api/patients"), "http://localhost:8080/api/patients");
        assert_eq!(config.default_route, "/dashboard");
    }
}
