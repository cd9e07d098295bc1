//! # Insight Module
//!
//! Strengths and improvement areas shown beside an analysis.

use crate::icon::Icon;
use serde::{Deserialize, Serialize};

/// Which column an insight belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsightCategory {
    #[serde(rename = "Strengths")]
    Strengths,
    #[serde(rename = "Areas for Improvement")]
    AreasForImprovement,
}

impl InsightCategory {
    /// Card heading.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Strengths => "Strengths",
            Self::AreasForImprovement => "Areas for Improvement",
        }
    }

    /// Heading icon.
    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Strengths => Icon::TrendingUp,
            Self::AreasForImprovement => Icon::Eye,
        }
    }
}

/// A titled list of observations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Strengths or areas for improvement.
    pub category: InsightCategory,
    /// The observations, in display order.
    pub items: Vec<String>,
}

impl Insight {
    /// Create an insight from any list of string-like items.
    #[must_use]
    pub fn new<I, S>(category: InsightCategory, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}
