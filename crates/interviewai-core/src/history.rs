//! # History Module
//!
//! The "Recent Interviews" list.
//!
//! Only an entry flagged `is_new` links to the full analysis; every other
//! row is sample data with no destination.

use crate::route::Page;
use crate::score::{Percent, Rating};
use serde::{Deserialize, Serialize};

/// One row of the recent-interviews list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRecord {
    pub id: u32,
    /// ISO date, e.g. `2024-01-15`.
    pub date: String,
    pub company: String,
    pub score: Percent,
    pub status: Rating,
    pub is_new: bool,
}

impl InterviewRecord {
    /// Create a record whose status is derived from its score.
    #[must_use]
    pub fn new(
        id: u32,
        date: impl Into<String>,
        company: impl Into<String>,
        score: Percent,
        is_new: bool,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            company: company.into(),
            score,
            status: Rating::for_score(score),
            is_new,
        }
    }

    /// Where the row's action button leads, if anywhere.
    #[must_use]
    pub fn analysis_link(&self) -> Option<Page> {
        self.is_new.then_some(Page::Analysis)
    }
}

/// An ordered list of interview records, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewHistory {
    records: Vec<InterviewRecord>,
}

impl InterviewHistory {
    #[must_use]
    pub fn new(records: Vec<InterviewRecord>) -> Self {
        Self { records }
    }

    /// All records in display order.
    #[must_use]
    pub fn records(&self) -> &[InterviewRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
