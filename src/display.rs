//! Display state for strength, detailed-check and brute-force results.
//!
//! Adapters only read their input; rendering is up to the caller.

use crate::types::{Score, StrengthReport};
use crate::wire::{BruteForceResponse, PasswordCheckResponse, StrengthCheckResponse, StrengthTier};

pub const EMPTY_STRENGTH_TEXT: &str = "Enter a password";
pub const EMPTY_SUGGESTIONS_TEXT: &str = "Enter a password to get suggestions";
pub const NO_SUGGESTIONS_TEXT: &str = "Your password looks good!";
pub const NOT_AVAILABLE: &str = "N/A";

/// Strength meter level, one per score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeterLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl MeterLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            MeterLevel::VeryWeak => "very-weak",
            MeterLevel::Weak => "weak",
            MeterLevel::Medium => "medium",
            MeterLevel::Strong => "strong",
            MeterLevel::VeryStrong => "very-strong",
        }
    }
}

impl From<Score> for MeterLevel {
    fn from(score: Score) -> Self {
        match score.value() {
            0 => MeterLevel::VeryWeak,
            1 => MeterLevel::Weak,
            2 => MeterLevel::Medium,
            3 => MeterLevel::Strong,
            _ => MeterLevel::VeryStrong,
        }
    }
}

/// State of a character-class indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Pass,
    Fail,
    /// No password entered yet.
    Unknown,
}

impl From<bool> for Indicator {
    fn from(present: bool) -> Self {
        if present {
            Indicator::Pass
        } else {
            Indicator::Fail
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthDisplay {
    /// `None` while no password has been evaluated.
    pub meter: Option<MeterLevel>,
    pub strength_text: String,
    pub length_text: String,
    pub crack_time_text: String,
    pub uppercase: Indicator,
    pub lowercase: Indicator,
    pub numbers: Indicator,
    pub symbols: Indicator,
    pub suggestions: Vec<String>,
}

impl StrengthDisplay {
    /// The "no data yet" state shown for an empty password.
    pub fn empty() -> Self {
        Self {
            meter: None,
            strength_text: EMPTY_STRENGTH_TEXT.to_string(),
            length_text: "0".to_string(),
            crack_time_text: "-".to_string(),
            uppercase: Indicator::Unknown,
            lowercase: Indicator::Unknown,
            numbers: Indicator::Unknown,
            symbols: Indicator::Unknown,
            suggestions: vec![EMPTY_SUGGESTIONS_TEXT.to_string()],
        }
    }

    pub fn from_report(report: &StrengthReport) -> Self {
        Self {
            meter: Some(report.score.into()),
            strength_text: report.label.to_string(),
            length_text: report.length.to_string(),
            crack_time_text: report.crack_time.to_string(),
            uppercase: report.has_upper.into(),
            lowercase: report.has_lower.into(),
            numbers: report.has_digit.into(),
            symbols: report.has_symbol.into(),
            suggestions: suggestion_lines(&report.suggestions),
        }
    }

    /// Remote scores outside 0..=4 are clamped for the meter.
    pub fn from_response(response: &PasswordCheckResponse) -> Self {
        Self {
            meter: Some(Score::clamped(response.score).into()),
            strength_text: response.strength_text.clone(),
            length_text: response.length.to_string(),
            crack_time_text: response.crack_time_display.clone(),
            uppercase: response.has_upper.into(),
            lowercase: response.has_lower.into(),
            numbers: response.has_digit.into(),
            symbols: response.has_symbol.into(),
            suggestions: suggestion_lines(&response.suggestions),
        }
    }
}

impl Default for StrengthDisplay {
    fn default() -> Self {
        Self::empty()
    }
}

fn suggestion_lines(suggestions: &[String]) -> Vec<String> {
    if suggestions.is_empty() {
        vec![NO_SUGGESTIONS_TEXT.to_string()]
    } else {
        suggestions.to_vec()
    }
}

/// Result of the detailed `/check-strength` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedDisplay {
    /// Label exactly as returned by the backend.
    pub strength_text: String,
    pub tier: StrengthTier,
    pub feedback: Vec<String>,
    /// Suggested replacement password; hidden when `None`.
    pub suggestion: Option<String>,
}

impl From<&StrengthCheckResponse> for DetailedDisplay {
    fn from(response: &StrengthCheckResponse) -> Self {
        Self {
            strength_text: response.strength.clone(),
            tier: response.tier(),
            feedback: response.feedback.clone(),
            suggestion: response.suggestion.clone().filter(|s| !s.is_empty()),
        }
    }
}

/// Tone of a result line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultTone {
    Success,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteForceDisplay {
    pub status: String,
    pub tone: ResultTone,
    pub time_text: String,
    pub attempts_text: String,
    pub cracked_text: String,
}

impl BruteForceDisplay {
    /// Shown when the brute-force request itself failed.
    pub fn failed() -> Self {
        Self {
            status: "Test Failed".to_string(),
            tone: ResultTone::Fail,
            time_text: NOT_AVAILABLE.to_string(),
            attempts_text: NOT_AVAILABLE.to_string(),
            cracked_text: NOT_AVAILABLE.to_string(),
        }
    }
}

impl From<&BruteForceResponse> for BruteForceDisplay {
    fn from(response: &BruteForceResponse) -> Self {
        let (status, tone) = if response.success {
            ("Password Cracked! ⚠️", ResultTone::Fail)
        } else {
            ("Password Not Cracked ✅", ResultTone::Success)
        };
        let cracked_text = match (response.success, &response.cracked_password) {
            (true, Some(pwd)) => pwd.clone(),
            _ => NOT_AVAILABLE.to_string(),
        };
        Self {
            status: status.to_string(),
            tone,
            time_text: format!("{:.3} seconds", response.time_taken),
            attempts_text: group_thousands(response.attempts),
            cracked_text,
        }
    }
}

/// Formats `n` with `,` between groups of three digits.
pub(crate) fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
