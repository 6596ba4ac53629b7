//! Character profile of a password: length and character-class coverage.

use secrecy::{ExposeSecret, SecretString};

/// Punctuation counted as a symbol by the heuristic.
pub const SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|', '<',
    '>',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterProfile {
    pub length: usize,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl CharacterProfile {
    pub fn of(password: &SecretString) -> Self {
        Self::of_str(password.expose_secret())
    }

    pub(crate) fn of_str(pwd: &str) -> Self {
        Self {
            length: pwd.chars().count(),
            has_upper: pwd.chars().any(|c| c.is_ascii_uppercase()),
            has_lower: pwd.chars().any(|c| c.is_ascii_lowercase()),
            has_digit: pwd.chars().any(|c| c.is_ascii_digit()),
            has_symbol: pwd.chars().any(|c| SYMBOLS.contains(&c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_counts_chars_not_bytes() {
        let profile = CharacterProfile::of_str("héllo");
        assert_eq!(profile.length, 5);
    }

    #[test]
    fn test_profile_ascii_classes_only() {
        // Non-ASCII letters fall outside A-Z / a-z
        let profile = CharacterProfile::of_str("ÉÀü");
        assert!(!profile.has_upper);
        assert!(!profile.has_lower);
    }

    #[test]
    fn test_profile_symbol_set() {
        assert!(CharacterProfile::of_str("a\"b").has_symbol);
        assert!(CharacterProfile::of_str("a|b").has_symbol);
        // Not in the set
        assert!(!CharacterProfile::of_str("a-b_c+d").has_symbol);
        assert!(!CharacterProfile::of_str("a b").has_symbol);
    }

    #[test]
    fn test_profile_all_classes() {
        let profile = CharacterProfile::of_str("Abcdefgh1!");
        assert_eq!(
            profile,
            CharacterProfile {
                length: 10,
                has_upper: true,
                has_lower: true,
                has_digit: true,
                has_symbol: true,
            }
        );
    }
}
