//! # Records Module
//!
//! Display records fed to gauges, bars, and charts.
//!
//! Records are plain data. They are built once by the catalog and never
//! mutated.

use crate::icon::Icon;
use crate::score::Percent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A labelled score with a one-line explanation. Drawn as a bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreMetric {
    pub label: String,
    pub score: Percent,
    pub description: String,
}

impl ScoreMetric {
    #[must_use]
    pub fn new(label: impl Into<String>, score: Percent, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            score,
            description: description.into(),
        }
    }

    /// A metric without a description line.
    #[must_use]
    pub fn bare(label: impl Into<String>, score: Percent) -> Self {
        Self::new(label, score, String::new())
    }
}

/// One axis of the radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDatum {
    pub skill: String,
    pub score: Percent,
}

impl SkillDatum {
    #[must_use]
    pub fn new(skill: impl Into<String>, score: Percent) -> Self {
        Self {
            skill: skill.into(),
            score,
        }
    }
}

/// One point of the performance trend line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub score: Percent,
}

impl TrendPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, score: Percent) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// A circular gauge with its heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gauge {
    pub title: String,
    pub score: Percent,
}

impl Gauge {
    #[must_use]
    pub fn new(title: impl Into<String>, score: Percent) -> Self {
        Self {
            title: title.into(),
            score,
        }
    }
}

/// Headline figure of a metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MetricValue {
    Percent(Percent),
    Count(u32),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{p}"),
            Self::Count(n) => write!(f, "{n}"),
        }
    }
}

/// A key-metric card at the top of a dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    pub title: String,
    pub icon: Icon,
    pub value: MetricValue,
    pub caption: String,
    pub caption_icon: Icon,
}

impl MetricCard {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        icon: Icon,
        value: MetricValue,
        caption: impl Into<String>,
        caption_icon: Icon,
    ) -> Self {
        Self {
            title: title.into(),
            icon,
            value,
            caption: caption.into(),
            caption_icon,
        }
    }
}
