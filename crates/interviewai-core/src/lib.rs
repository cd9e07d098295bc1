//! # InterviewAI Core
//!
//! Everything the InterviewAI pages show, and every decision they make about
//! what to show, without any rendering or I/O.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  records     │   │  catalog     │   │  chart       │
//! │  score       │──►│  (static     │──►│  (gauge, bar │
//! │  insight     │   │   page data) │   │  line, radar)│
//! │  history     │   └──────────────┘   └──────────────┘
//! └──────────────┘
//! ┌──────────────┐   ┌──────────────┐
//! │  processing  │   │  auth/route  │
//! │  (timeline)  │   │  (page gate) │
//! └──────────────┘   └──────────────┘
//! ```
//!
//! All values are compiled-in constants. Geometry is computed in fixed-point
//! integers so the same input always yields the same SVG coordinates.

pub mod auth;
pub mod catalog;
pub mod chart;
pub mod error;
pub mod history;
pub mod icon;
pub mod insight;
pub mod processing;
pub mod records;
pub mod route;
pub mod score;

pub use auth::{Access, Session, gate};
pub use catalog::{AnalysisReport, Dashboard, DashboardVariant, SampleAnalysis};
pub use chart::{Fixed, GaugeGeometry, LineChart, Point, RadarChart};
pub use error::CoreError;
pub use history::{InterviewHistory, InterviewRecord};
pub use icon::Icon;
pub use insight::{Insight, InsightCategory};
pub use processing::{
    Frame, FrameEvent, PROCESSING_STEPS, ProcessingStep, ProcessingTimeline, ProcessingTiming,
};
pub use records::{Gauge, MetricCard, MetricValue, ScoreMetric, SkillDatum, TrendPoint};
pub use route::Page;
pub use score::{Percent, Rating};
