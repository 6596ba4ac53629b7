//! Password evaluation sections
//!
//! Each section checks one aspect of the character profile and, when the
//! check fails, yields the suggestion shown to the user.

mod length;
mod variety;

pub(crate) use length::{MIN_LENGTH, RECOMMENDED_LENGTH};
pub use length::{extended_length_section, length_section};
pub use variety::{digit_section, lowercase_section, symbol_section, uppercase_section};

/// Result type for section evaluation functions.
/// - `Some(suggestion)` - Section failed, with the improvement hint
/// - `None` - Section passed
pub type SectionResult = Option<String>;
