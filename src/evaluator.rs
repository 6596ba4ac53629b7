//! Fallback strength evaluator - local scoring used when the strength API is
//! unreachable.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::profile::CharacterProfile;
use crate::sections::{
    MIN_LENGTH, RECOMMENDED_LENGTH, SectionResult, digit_section, extended_length_section,
    length_section, lowercase_section, symbol_section, uppercase_section,
};
use crate::types::{Score, StrengthReport};

/// Evaluates password strength and returns a detailed report.
///
/// Deterministic and infallible: the same input always yields the same
/// report, and an empty password yields a score of 0.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthReport` with character-class flags, score, label, crack-time
/// bucket and suggestions.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthReport {
    let profile = CharacterProfile::of(password);
    evaluate_profile(&profile)
}

pub(crate) fn evaluate_profile(profile: &CharacterProfile) -> StrengthReport {
    // Orchestrator: suggestion order is part of the output contract
    let sections: [(&str, fn(&CharacterProfile) -> SectionResult); 6] = [
        ("length", length_section),
        ("uppercase", uppercase_section),
        ("lowercase", lowercase_section),
        ("digits", digit_section),
        ("symbols", symbol_section),
        ("extended_length", extended_length_section),
    ];

    let mut suggestions = Vec::new();
    for (_section_name, section_fn) in sections {
        if let Some(suggestion) = section_fn(profile) {
            #[cfg(feature = "tracing")]
            tracing::trace!("section failed: {}", _section_name);
            suggestions.push(suggestion);
        }
    }

    // One point per satisfied condition; five conditions, four tiers
    let points = [
        profile.length >= MIN_LENGTH,
        profile.has_upper && profile.has_lower,
        profile.has_digit,
        profile.has_symbol,
        profile.length >= RECOMMENDED_LENGTH,
    ]
    .iter()
    .filter(|&&met| met)
    .count() as u32;
    let score = Score::new(points);

    StrengthReport {
        length: profile.length,
        has_upper: profile.has_upper,
        has_lower: profile.has_lower,
        has_digit: profile.has_digit,
        has_symbol: profile.has_symbol,
        score,
        label: score.label(),
        crack_time: score.crack_time(),
        suggestions,
    }
}

/// Async version that sends the report via channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    tx: mpsc::Sender<StrengthReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("fallback evaluation is about to start...");

    let report = evaluate_password_strength(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength report: {}", _e);
    }
}
