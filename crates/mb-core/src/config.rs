//! Configuration types and loading

use serde::{Deserialize, Serialize};

use crate::pagination::{Pagination, DEFAULT_PAGE_SIZE};

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Remote catalog endpoints
    pub api: ApiConfig,

    /// Defaults applied to queries that do not override them
    pub query: QueryDefaults,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Site root, with trailing slash
    pub base_url: String,
    /// Path of the problem search endpoint, relative to `base_url`
    pub problems_path: String,
    /// Path of the login form, relative to `base_url`
    pub login_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct QueryDefaults {
    pub page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://moonboard.com/".to_string(),
                problems_path: "Problems/GetProblems".to_string(),
                login_path: "Account/Login".to_string(),
            },
            query: QueryDefaults {
                page_size: DEFAULT_PAGE_SIZE,
            },
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("MOONBOARD_BASE_URL") {
            config.api.base_url = if url.ends_with('/') {
                url
            } else {
                format!("{}/", url)
            };
        }
        if let Some(path) = lookup("MOONBOARD_PROBLEMS_PATH") {
            config.api.problems_path = path.trim_start_matches('/').to_string();
        }
        if let Some(path) = lookup("MOONBOARD_LOGIN_PATH") {
            config.api.login_path = path.trim_start_matches('/').to_string();
        }

        if let Some(size) = lookup("MOONBOARD_PAGE_SIZE") {
            let parsed: i64 = size.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "MOONBOARD_PAGE_SIZE".to_string(),
                message: format!("'{}' is not a number", size),
            })?;
            config.query.page_size =
                Pagination::check_page_size(parsed).map_err(|e| ConfigError::InvalidValue {
                    key: "MOONBOARD_PAGE_SIZE".to_string(),
                    message: e.to_string(),
                })?;
        }

        tracing::debug!(
            base_url = %config.api.base_url,
            page_size = config.query.page_size,
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Full URL of the problem search endpoint
    pub fn problems_url(&self) -> String {
        format!("{}{}", self.api.base_url, self.api.problems_path)
    }

    /// Full URL of the login form
    pub fn login_url(&self) -> String {
        format!("{}{}", self.api.base_url, self.api.login_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.query.page_size, 15);
        assert_eq!(
            config.problems_url(),
            "https://moonboard.com/Problems/GetProblems"
        );
        assert_eq!(config.login_url(), "https://moonboard.com/Account/Login");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("MOONBOARD_BASE_URL", "http://localhost:8080"),
            ("MOONBOARD_PROBLEMS_PATH", "/api/problems"),
            ("MOONBOARD_PAGE_SIZE", "40"),
        ]))
        .unwrap();

        assert_eq!(config.problems_url(), "http://localhost:8080/api/problems");
        assert_eq!(config.query.page_size, 40);
    }

    #[test]
    fn test_invalid_page_size() {
        let err = AppConfig::from_lookup(lookup(&[("MOONBOARD_PAGE_SIZE", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = AppConfig::from_lookup(lookup(&[("MOONBOARD_PAGE_SIZE", "500")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for MOONBOARD_PAGE_SIZE: page size must be between 1 and 100"
        );
    }
}
