//! Icon identifiers referenced by the catalogs.
//!
//! The core only names icons; the app owns the SVG artwork.

use serde::{Deserialize, Serialize};

/// A named UI icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ArrowLeft,
    Award,
    BarChart,
    Brain,
    Calendar,
    CheckCircle,
    Download,
    Eye,
    Lock,
    LogOut,
    Mail,
    Mic,
    Play,
    Share,
    TrendingUp,
    Upload,
    User,
    Users,
    Video,
}

impl Icon {
    /// Stable kebab-case name, used as a CSS hook and in progress events.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ArrowLeft => "arrow-left",
            Self::Award => "award",
            Self::BarChart => "bar-chart",
            Self::Brain => "brain",
            Self::Calendar => "calendar",
            Self::CheckCircle => "check-circle",
            Self::Download => "download",
            Self::Eye => "eye",
            Self::Lock => "lock",
            Self::LogOut => "log-out",
            Self::Mail => "mail",
            Self::Mic => "mic",
            Self::Play => "play",
            Self::Share => "share",
            Self::TrendingUp => "trending-up",
            Self::Upload => "upload",
            Self::User => "user",
            Self::Users => "users",
            Self::Video => "video",
        }
    }
}
