//! Length sections - minimum and recommended password length.

use super::SectionResult;
use crate::profile::CharacterProfile;

pub(crate) const MIN_LENGTH: usize = 8;
pub(crate) const RECOMMENDED_LENGTH: usize = 12;

/// Checks if the password meets the minimum length.
///
/// # Returns
/// - `Some(suggestion)` if password is shorter than 8 characters
/// - `None` if password has sufficient length
pub fn length_section(profile: &CharacterProfile) -> SectionResult {
    if profile.length < MIN_LENGTH {
        return Some(format!("Use at least {} characters", MIN_LENGTH));
    }
    None
}

/// Checks if the password reaches the recommended length.
pub fn extended_length_section(profile: &CharacterProfile) -> SectionResult {
    if profile.length < RECOMMENDED_LENGTH {
        return Some(format!(
            "Consider using a longer password ({}+ characters)",
            RECOMMENDED_LENGTH
        ));
    }
    None
}
