//! Strength report types produced by the fallback heuristic.

use std::fmt;

/// Ordinal strength score, always within `0..=Score::MAX`.
///
/// Every constructor clamps, so a `Score` can index the label and crack-time
/// tables without bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    /// Highest representable score. Inputs above it collapse to this value.
    pub const MAX: u8 = 4;

    /// Builds a score from accumulated points, clamping to [`Score::MAX`].
    pub fn new(points: u32) -> Self {
        Score(points.min(Self::MAX as u32) as u8)
    }

    /// Builds a score from a signed value reported by a remote service,
    /// clamping into `0..=MAX`.
    pub fn clamped(value: i64) -> Self {
        Score(value.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> StrengthLabel {
        match self.0 {
            0 => StrengthLabel::VeryWeak,
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Moderate,
            3 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    pub fn crack_time(&self) -> CrackTimeBucket {
        match self.0 {
            0 => CrackTimeBucket::LessThanASecond,
            1 => CrackTimeBucket::Minutes,
            2 => CrackTimeBucket::HoursToDays,
            3 => CrackTimeBucket::Months,
            _ => CrackTimeBucket::Centuries,
        }
    }
}

/// Human-readable strength tier derived from a [`Score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse estimate of brute-force difficulty. Not a computed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrackTimeBucket {
    LessThanASecond,
    Minutes,
    HoursToDays,
    Months,
    Centuries,
}

impl CrackTimeBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrackTimeBucket::LessThanASecond => "less than a second",
            CrackTimeBucket::Minutes => "minutes",
            CrackTimeBucket::HoursToDays => "hours to days",
            CrackTimeBucket::Months => "months",
            CrackTimeBucket::Centuries => "centuries",
        }
    }
}

impl fmt::Display for CrackTimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating a password locally.
///
/// `label` and `crack_time` are always derived from `score`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub length: usize,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub score: Score,
    pub label: StrengthLabel,
    pub crack_time: CrackTimeBucket,
    pub suggestions: Vec<String>,
}
