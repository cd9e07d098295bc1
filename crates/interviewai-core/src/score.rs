//! # Score Module
//!
//! The `Percent` newtype behind every gauge, bar, and badge.
//!
//! A percentage is always within 0..=100. `Percent::new` clamps, while
//! `Percent::try_new` rejects out-of-range input, so nothing downstream can
//! draw a bar wider than its track.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of every displayed score.
pub const MAX_PERCENT: u8 = 100;

// =============================================================================
// PERCENT
// =============================================================================

/// A display percentage in 0..=100.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Percent(u8);

impl Percent {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const FULL: Self = Self(MAX_PERCENT);

    /// Create a percentage, clamping anything above 100.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        if value > MAX_PERCENT as u32 {
            Self(MAX_PERCENT)
        } else {
            Self(value as u8)
        }
    }

    /// Create a percentage, rejecting anything above 100.
    pub fn try_new(value: u32) -> Result<Self, CoreError> {
        if value > MAX_PERCENT as u32 {
            return Err(CoreError::ScoreOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// The raw value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is exactly 100%.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == MAX_PERCENT
    }

    /// Scale `full` by this percentage, rounding down.
    ///
    /// The result never exceeds `full`.
    #[must_use]
    pub const fn of(self, full: u64) -> u64 {
        full.saturating_mul(self.0 as u64) / MAX_PERCENT as u64
    }

    /// CSS width for a bar fill, e.g. `"87%"`.
    #[must_use]
    pub fn css_width(self) -> String {
        format!("{}%", self.0)
    }

    /// Add `step` points, stopping at `cap`.
    #[must_use]
    pub fn advance_toward(self, step: u8, cap: Self) -> Self {
        let next = self.0.saturating_add(step);
        if next >= cap.0 { cap } else { Self(next) }
    }
}

impl TryFrom<u32> for Percent {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percent> for u32 {
    fn from(p: Percent) -> Self {
        p.0 as u32
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// RATING
// =============================================================================

/// Qualitative label shown next to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    NeedsWork,
    Good,
    Excellent,
    Outstanding,
}

impl Rating {
    /// Rating bands: 90+ outstanding, 85+ excellent, 70+ good.
    #[must_use]
    pub fn for_score(score: Percent) -> Self {
        match score.value() {
            90..=100 => Self::Outstanding,
            85..=89 => Self::Excellent,
            70..=84 => Self::Good,
            _ => Self::NeedsWork,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NeedsWork => "Needs Work",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
            Self::Outstanding => "Outstanding",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_above_hundred() {
        assert_eq!(Percent::new(150).value(), 100);
        assert_eq!(Percent::new(87).value(), 87);
        assert!(Percent::new(u32::MAX).is_full());
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert_eq!(Percent::try_new(101), Err(CoreError::ScoreOutOfRange(101)));
        assert_eq!(Percent::try_new(100), Ok(Percent::FULL));
    }

    #[test]
    fn of_scales_down() {
        assert_eq!(Percent::new(50).of(300), 150);
        assert_eq!(Percent::new(87).of(25132), 21864);
        assert_eq!(Percent::FULL.of(25132), 25132);
        assert_eq!(Percent::ZERO.of(25132), 0);
    }

    #[test]
    fn css_width_and_display() {
        assert_eq!(Percent::new(91).css_width(), "91%");
        assert_eq!(Percent::new(91).to_string(), "91%");
    }

    #[test]
    fn advance_toward_stops_at_cap() {
        let cap = Percent::new(25);
        assert_eq!(Percent::new(22).advance_toward(2, cap).value(), 24);
        assert_eq!(Percent::new(24).advance_toward(2, cap), cap);
        assert_eq!(cap.advance_toward(2, cap), cap);
    }

    #[test]
    fn deserialize_validates() {
        let ok: Percent = serde_json::from_str("42").unwrap();
        assert_eq!(ok.value(), 42);
        assert!(serde_json::from_str::<Percent>("142").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "42");
    }

    #[test]
    fn rating_bands_match_history_labels() {
        assert_eq!(Rating::for_score(Percent::new(91)), Rating::Outstanding);
        assert_eq!(Rating::for_score(Percent::new(87)), Rating::Excellent);
        assert_eq!(Rating::for_score(Percent::new(82)), Rating::Good);
        assert_eq!(Rating::for_score(Percent::new(79)), Rating::Good);
        assert_eq!(Rating::for_score(Percent::new(40)), Rating::NeedsWork);
    }
}
