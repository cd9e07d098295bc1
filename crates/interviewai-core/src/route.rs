//! Client routes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A top-level page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    Dashboard,
    DemoDashboard,
    Analysis,
    Upload,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Dashboard,
        Page::DemoDashboard,
        Page::Analysis,
        Page::Upload,
    ];

    /// URL path of the page.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Dashboard => "/dashboard",
            Self::DemoDashboard => "/demo-dashboard",
            Self::Analysis => "/analysis",
            Self::Upload => "/upload",
        }
    }

    /// Resolve a URL path. A single trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        Self::ALL.into_iter().find(|p| p.path() == trimmed)
    }

    /// Document title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "InterviewAI",
            Self::Dashboard => "InterviewAI Dashboard",
            Self::DemoDashboard => "InterviewAI Demo Dashboard",
            Self::Analysis => "Interview Performance Analysis",
            Self::Upload => "Upload Your Interview Video",
        }
    }

    /// File stem used by the static export.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "index",
            Self::Dashboard => "dashboard",
            Self::DemoDashboard => "demo-dashboard",
            Self::Analysis => "analysis",
            Self::Upload => "upload",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
