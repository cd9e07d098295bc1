//! # Error Module
//!
//! Errors raised by the core when a caller hands it data it cannot display.

use thiserror::Error;

/// Errors from the InterviewAI core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A score was outside the displayable 0..=100 range.
    #[error("score {0} out of valid range 0..=100")]
    ScoreOutOfRange(u32),

    /// A chart was asked to plot an empty series.
    #[error("cannot plot an empty series")]
    EmptySeries,

    /// The radar chart only supports axis counts that divide 24 (min 3).
    #[error("radar chart cannot lay out {0} axes (supported: 3, 4, 6, 8, 12, 24)")]
    UnsupportedAxisCount(usize),
}
