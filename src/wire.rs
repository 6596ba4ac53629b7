//! JSON bodies exchanged with the password analysis backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on brute-force attempts requested from the backend.
pub const MAX_BRUTE_FORCE_ATTEMPTS: u64 = 1_000_000;

/// Body of `/check-password` and `/check-strength`.
#[cfg(feature = "async")]
#[derive(Debug, Serialize)]
pub(crate) struct PasswordRequest<'a> {
    pub password: &'a str,
}

/// Body of `/brute-force`.
#[cfg(feature = "async")]
#[derive(Debug, Serialize)]
pub(crate) struct BruteForceRequest<'a> {
    pub password: &'a str,
    pub algorithm: HashAlgorithm,
    pub max_attempts: u64,
}

/// Response of `/check-password`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PasswordCheckResponse {
    pub length: usize,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    /// Nominally 0..=4; clamped when displayed.
    pub score: i64,
    pub strength_text: String,
    pub crack_time_display: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Response of `/check-strength`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StrengthCheckResponse {
    pub strength: String,
    #[serde(default)]
    pub feedback: Vec<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl StrengthCheckResponse {
    pub fn tier(&self) -> StrengthTier {
        StrengthTier::from_label(&self.strength)
    }
}

/// Response of `/brute-force`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BruteForceResponse {
    pub success: bool,
    /// Seconds, fractional.
    pub time_taken: f64,
    pub attempts: u64,
    #[serde(default)]
    pub cracked_password: Option<String>,
    #[serde(default)]
    pub algorithm: Option<String>,
}

/// Response of `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Hash algorithms the backend can brute force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha1,
    Md5,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 3] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha1,
        HashAlgorithm::Md5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Md5 => "md5",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported algorithm: {0}")]
pub struct UnsupportedAlgorithm(pub String);

impl FromStr for HashAlgorithm {
    type Err = UnsupportedAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnsupportedAlgorithm(s.to_string()))
    }
}

/// Coarse tier reported by `/check-strength`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
    Unrecognized,
}

impl StrengthTier {
    /// Case-insensitive match on the backend's label.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "weak" => StrengthTier::Weak,
            "medium" => StrengthTier::Medium,
            "strong" => StrengthTier::Strong,
            _ => StrengthTier::Unrecognized,
        }
    }
}
