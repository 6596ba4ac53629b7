//! Client configuration
//!
//! Resolves the backend address and request timeout from the environment.

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const BASE_URL_ENV: &str = "PWD_API_BASE_URL";
const TIMEOUT_ENV: &str = "PWD_API_TIMEOUT_SECS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid request timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Returns the backend base URL.
///
/// Priority:
/// 1. Environment variable `PWD_API_BASE_URL`
/// 2. Default `http://localhost:8000`
///
/// A trailing `/` is stripped so endpoint paths can be appended directly.
pub fn get_api_base_url() -> String {
    let url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    normalize_base_url(&url)
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `PWD_API_BASE_URL` and `PWD_API_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTimeout` if the timeout is not a positive
    /// integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new(get_api_base_url());
        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&s| s > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_get_api_base_url_default() {
        remove_env(BASE_URL_ENV);

        assert_eq!(get_api_base_url(), "http://localhost:8000");
    }

    #[test]
    #[serial]
    fn test_get_api_base_url_from_env() {
        set_env(BASE_URL_ENV, "https://pwd.example.com/api/");

        assert_eq!(get_api_base_url(), "https://pwd.example.com/api");

        remove_env(BASE_URL_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        remove_env(BASE_URL_ENV);
        remove_env(TIMEOUT_ENV);

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_from_env_custom_timeout() {
        set_env(TIMEOUT_ENV, "5");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));

        remove_env(TIMEOUT_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        for raw in ["abc", "0", "-3"] {
            set_env(TIMEOUT_ENV, raw);
            assert_eq!(
                ClientConfig::from_env(),
                Err(ConfigError::InvalidTimeout(raw.to_string()))
            );
        }

        remove_env(TIMEOUT_ENV);
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = ClientConfig::new("http://127.0.0.1:9000/");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
    }
}
