//! HTTP client for the password analysis backend.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::wire::{
    BruteForceRequest, BruteForceResponse, HashAlgorithm, HealthStatus, MAX_BRUTE_FORCE_ATTEMPTS,
    PasswordCheckResponse, PasswordRequest, StrengthCheckResponse,
};

const CHECK_PASSWORD: &str = "/check-password";
const CHECK_STRENGTH: &str = "/check-strength";
const BRUTE_FORCE: &str = "/brute-force";
const HEALTH: &str = "/health";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{endpoint} returned HTTP {status}{}", detail_suffix(.detail))]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

/// Client for the `/check-password`, `/check-strength`, `/brute-force` and
/// `/health` endpoints. No request is retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let parsed = reqwest::Url::parse(&config.base_url)
            .map_err(|_| ApiError::InvalidBaseUrl(config.base_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("pwd-tester/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Scores a password: `POST /check-password`.
    pub async fn check_password(
        &self,
        password: &SecretString,
    ) -> Result<PasswordCheckResponse, ApiError> {
        let body = PasswordRequest {
            password: password.expose_secret(),
        };
        self.post_json(CHECK_PASSWORD, &body).await
    }

    /// Requests a detailed verdict: `POST /check-strength`.
    pub async fn check_strength(
        &self,
        password: &SecretString,
    ) -> Result<StrengthCheckResponse, ApiError> {
        let body = PasswordRequest {
            password: password.expose_secret(),
        };
        self.post_json(CHECK_STRENGTH, &body).await
    }

    /// Runs a brute-force simulation: `POST /brute-force`.
    ///
    /// `max_attempts` is capped at [`MAX_BRUTE_FORCE_ATTEMPTS`].
    pub async fn brute_force(
        &self,
        password: &SecretString,
        algorithm: HashAlgorithm,
        max_attempts: u64,
    ) -> Result<BruteForceResponse, ApiError> {
        let body = BruteForceRequest {
            password: password.expose_secret(),
            algorithm,
            max_attempts: max_attempts.min(MAX_BRUTE_FORCE_ATTEMPTS),
        };
        self.post_json(BRUTE_FORCE, &body).await
    }

    /// Probes the backend: `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self.client.get(self.endpoint(HEALTH)).send().await?;
        Self::decode(HEALTH, response).await
    }

    async fn post_json<B, T>(&self, endpoint: &'static str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint(endpoint))
            .json(body)
            .send()
            .await?;
        Self::decode(endpoint, response).await
    }

    async fn decode<T: DeserializeOwned>(
        endpoint: &'static str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .ok()
                .and_then(|body| error_detail(&body));

            #[cfg(feature = "tracing")]
            tracing::error!("{} failed with HTTP {}", endpoint, status);

            return Err(ApiError::Status {
                endpoint,
                status,
                detail,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

/// Extracts the `detail` field of an error body, if any.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeBackend, closed_port_url, spawn_backend};

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        for url in ["not a url", "ftp://example.com"] {
            let result = ApiClient::new(&ClientConfig::new(url));
            assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
        }
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(
            error_detail(r#"{"detail": "Password cannot be empty"}"#),
            Some("Password cannot be empty".to_string())
        );
        assert_eq!(error_detail("Internal Server Error"), None);
        assert_eq!(error_detail(r#"{"other": 1}"#), None);
    }

    #[tokio::test]
    async fn test_check_password() {
        let backend = FakeBackend::default();
        let url = spawn_backend(backend.router()).await;
        let api = ApiClient::new(&ClientConfig::new(&url)).unwrap();

        let resp = api.check_password(&secret("Tr0ub4dor&3")).await.unwrap();
        assert_eq!(resp.score, 3);
        assert_eq!(resp.strength_text, "Strong");
        assert_eq!(resp.crack_time_display, "3 years");
        assert_eq!(
            backend.last_request(),
            Some(serde_json::json!({"password": "Tr0ub4dor&3"}))
        );
    }

    #[tokio::test]
    async fn test_check_strength() {
        let url = spawn_backend(FakeBackend::default().router()).await;
        let api = ApiClient::new(&ClientConfig::new(&url)).unwrap();

        let resp = api.check_strength(&secret("hunter2")).await.unwrap();
        assert_eq!(resp.strength, "Weak");
        assert_eq!(resp.feedback, vec!["Add another word or two."]);
        assert_eq!(resp.suggestion.as_deref(), Some("hunter2-Copper-Lagoon!"));
    }

    #[tokio::test]
    async fn test_brute_force_caps_attempts() {
        let backend = FakeBackend::default();
        let url = spawn_backend(backend.router()).await;
        let api = ApiClient::new(&ClientConfig::new(&url)).unwrap();

        let resp = api
            .brute_force(&secret("abc"), HashAlgorithm::Sha1, 5_000_000)
            .await
            .unwrap();
        assert!(resp.success);
        assert_eq!(resp.cracked_password.as_deref(), Some("abc"));
        assert_eq!(
            backend.last_request(),
            Some(serde_json::json!({
                "password": "abc",
                "algorithm": "sha1",
                "max_attempts": 1_000_000
            }))
        );
    }

    #[tokio::test]
    async fn test_health() {
        let url = spawn_backend(FakeBackend::default().router()).await;
        let api = ApiClient::new(&ClientConfig::new(&url)).unwrap();

        assert!(api.health().await.unwrap().is_healthy());
    }

    #[tokio::test]
    async fn test_status_error_carries_detail() {
        let url = spawn_backend(FakeBackend::failing().router()).await;
        let api = ApiClient::new(&ClientConfig::new(&url)).unwrap();

        let err = api.check_password(&secret("abc")).await.unwrap_err();
        match err {
            ApiError::Status {
                endpoint,
                status,
                detail,
            } => {
                assert_eq!(endpoint, "/check-password");
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(detail.as_deref(), Some("analysis backend unavailable"));
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_error_on_closed_port() {
        let api = ApiClient::new(&ClientConfig::new(closed_port_url())).unwrap();

        let err = api.check_password(&secret("abc")).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
