//! Character variety sections - uppercase, lowercase, digits, symbols.

use super::SectionResult;
use crate::profile::CharacterProfile;

fn require(present: bool, suggestion: &str) -> SectionResult {
    if present {
        None
    } else {
        Some(suggestion.to_string())
    }
}

pub fn uppercase_section(profile: &CharacterProfile) -> SectionResult {
    require(profile.has_upper, "Add uppercase letters")
}

pub fn lowercase_section(profile: &CharacterProfile) -> SectionResult {
    require(profile.has_lower, "Add lowercase letters")
}

pub fn digit_section(profile: &CharacterProfile) -> SectionResult {
    require(profile.has_digit, "Add numbers")
}

pub fn symbol_section(profile: &CharacterProfile) -> SectionResult {
    require(profile.has_symbol, "Add symbols (!@#$%^&*)")
}
