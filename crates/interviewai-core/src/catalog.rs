//! # Catalog Module
//!
//! The compiled-in sample data behind every page.
//!
//! Nothing here is computed from an interview. Each function returns a fresh
//! copy of the same literals on every call.

use crate::history::{InterviewHistory, InterviewRecord};
use crate::icon::Icon;
use crate::insight::{Insight, InsightCategory};
use crate::records::{Gauge, MetricCard, MetricValue, ScoreMetric, SkillDatum, TrendPoint};
use crate::score::{Percent, Rating};
use serde::{Deserialize, Serialize};

const fn pct(value: u32) -> Percent {
    Percent::new(value)
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Which dashboard to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardVariant {
    /// The signed-in visitor's own dashboard.
    Personal,
    /// The locked sample shown to guests.
    Demo,
}

impl DashboardVariant {
    #[must_use]
    pub fn is_demo(self) -> bool {
        matches!(self, Self::Demo)
    }
}

/// Everything a dashboard page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub variant: DashboardVariant,
    pub heading: String,
    pub subheading: String,
    pub metric_cards: Vec<MetricCard>,
    pub trend: Vec<TrendPoint>,
    pub trend_caption: String,
    pub skills: Vec<SkillDatum>,
    pub gauges: Vec<Gauge>,
    pub history: InterviewHistory,
    pub history_caption: String,
}

impl Dashboard {
    /// Build the dashboard for `variant`.
    #[must_use]
    pub fn build(variant: DashboardVariant) -> Self {
        match variant {
            DashboardVariant::Personal => personal_dashboard(),
            DashboardVariant::Demo => demo_dashboard(),
        }
    }
}

/// Six months of scores drawn by the performance trend chart.
#[must_use]
pub fn performance_trend() -> Vec<TrendPoint> {
    [
        ("Aug", 65),
        ("Sep", 72),
        ("Oct", 68),
        ("Nov", 78),
        ("Dec", 82),
        ("Jan", 87),
    ]
    .into_iter()
    .map(|(month, score)| TrendPoint::new(month, pct(score)))
    .collect()
}

fn skills(scores: [u32; 6]) -> Vec<SkillDatum> {
    const NAMES: [&str; 6] = [
        "Communication",
        "Body Language",
        "Eye Contact",
        "Confidence",
        "Technical Knowledge",
        "Problem Solving",
    ];
    NAMES
        .into_iter()
        .zip(scores)
        .map(|(name, score)| SkillDatum::new(name, pct(score)))
        .collect()
}

fn latest_gauges(confidence: u32, communication: u32, technical: u32) -> Vec<Gauge> {
    vec![
        Gauge::new("Confidence Level", pct(confidence)),
        Gauge::new("Communication", pct(communication)),
        Gauge::new("Technical Skills", pct(technical)),
    ]
}

fn metric_cards(
    overall: (u32, &str),
    eye_contact: (u32, &str),
    speech: (u32, &str),
    interviews: (u32, &str),
) -> Vec<MetricCard> {
    vec![
        MetricCard::new(
            "Overall Score",
            Icon::Award,
            MetricValue::Percent(pct(overall.0)),
            overall.1,
            Icon::TrendingUp,
        ),
        MetricCard::new(
            "Eye Contact",
            Icon::Eye,
            MetricValue::Percent(pct(eye_contact.0)),
            eye_contact.1,
            Icon::TrendingUp,
        ),
        MetricCard::new(
            "Speech Quality",
            Icon::Mic,
            MetricValue::Percent(pct(speech.0)),
            speech.1,
            Icon::TrendingUp,
        ),
        MetricCard::new(
            "Interviews",
            Icon::Calendar,
            MetricValue::Count(interviews.0),
            interviews.1,
            Icon::Users,
        ),
    ]
}

fn personal_dashboard() -> Dashboard {
    Dashboard {
        variant: DashboardVariant::Personal,
        heading: "Your Performance Analytics".into(),
        subheading: "Track your interview performance and identify areas for improvement".into(),
        metric_cards: metric_cards(
            (87, "Latest interview"),
            (82, "Strong performance"),
            (91, "Excellent clarity"),
            (1, "Completed"),
        ),
        trend: performance_trend(),
        trend_caption: "Your interview scores over time".into(),
        skills: skills([91, 88, 82, 89, 85, 90]),
        gauges: latest_gauges(89, 91, 85),
        history: InterviewHistory::new(vec![
            InterviewRecord::new(1, "2024-01-15", "Your Latest Interview", pct(87), true),
            InterviewRecord::new(2, "2024-01-12", "Microsoft", pct(82), false),
            InterviewRecord::new(3, "2024-01-10", "Amazon", pct(91), false),
            InterviewRecord::new(4, "2024-01-08", "Meta", pct(79), false),
        ]),
        history_caption: "Your latest interview sessions and scores".into(),
    }
}

fn demo_dashboard() -> Dashboard {
    Dashboard {
        variant: DashboardVariant::Demo,
        heading: "Performance Analytics".into(),
        subheading: "Sample dashboard showing interview performance analytics".into(),
        metric_cards: metric_cards(
            (85, "+12% from last month"),
            (78, "+8% improvement"),
            (92, "+15% improvement"),
            (24, "This month"),
        ),
        trend: performance_trend(),
        trend_caption: "Your interview scores over the last 6 months".into(),
        skills: skills([85, 78, 92, 88, 82, 90]),
        gauges: latest_gauges(88, 85, 92),
        history: InterviewHistory::new(vec![
            InterviewRecord::new(1, "2024-01-15", "Google", pct(87), false),
            InterviewRecord::new(2, "2024-01-12", "Microsoft", pct(82), false),
            InterviewRecord::new(3, "2024-01-10", "Amazon", pct(91), false),
            InterviewRecord::new(4, "2024-01-08", "Meta", pct(79), false),
        ]),
        history_caption: "Sample interview sessions and scores".into(),
    }
}

// =============================================================================
// ANALYSIS REPORT
// =============================================================================

/// The full results page for the latest interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall: Percent,
    pub overall_rating: Rating,
    pub key_metrics: Vec<Gauge>,
    pub detailed: Vec<ScoreMetric>,
    pub insights: Vec<Insight>,
}

impl AnalysisReport {
    /// The canned report.
    #[must_use]
    pub fn sample() -> Self {
        let overall = pct(87);
        let confidence = pct(89);
        let eye_contact = pct(82);
        let body_language = pct(88);
        let speech_clarity = pct(86);

        Self {
            overall,
            overall_rating: Rating::for_score(overall),
            key_metrics: vec![
                Gauge::new("Confidence Level", confidence),
                Gauge::new("Eye Contact", eye_contact),
                Gauge::new("Communication", pct(91)),
                Gauge::new("Technical Skills", pct(85)),
            ],
            detailed: vec![
                ScoreMetric::new(
                    "Speech Clarity",
                    speech_clarity,
                    "Clear pronunciation and articulation",
                ),
                ScoreMetric::new(
                    "Eye Contact",
                    eye_contact,
                    "Maintained good camera eye contact",
                ),
                ScoreMetric::new(
                    "Body Language",
                    body_language,
                    "Professional posture and gestures",
                ),
                ScoreMetric::new(
                    "Confidence Level",
                    confidence,
                    "Demonstrated self-assurance",
                ),
            ],
            insights: vec![
                Insight::new(
                    InsightCategory::Strengths,
                    [
                        "Excellent posture throughout",
                        "Clear and articulate speech",
                        "Good eye contact with camera",
                        "Confident body language",
                    ],
                ),
                Insight::new(
                    InsightCategory::AreasForImprovement,
                    [
                        "Reduce filler words (um, uh)",
                        "Use more hand gestures",
                        "Smile more frequently",
                        "Vary speech pace for emphasis",
                    ],
                ),
            ],
        }
    }
}

// =============================================================================
// SAMPLE ANALYSIS (MODAL)
// =============================================================================

/// The shorter analysis shown in the home page's sample dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleAnalysis {
    pub video_duration: String,
    pub gauges: Vec<Gauge>,
    pub detailed: Vec<ScoreMetric>,
    pub insights: Vec<Insight>,
}

impl SampleAnalysis {
    /// The canned sample.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            video_duration: "2:34".into(),
            gauges: vec![
                Gauge::new("Overall Performance", pct(87)),
                Gauge::new("Eye Contact", pct(82)),
                Gauge::new("Body Language", pct(91)),
            ],
            detailed: vec![
                ScoreMetric::bare("Speech Clarity", pct(85)),
                ScoreMetric::bare("Confidence Level", pct(89)),
                ScoreMetric::bare("Gesture Usage", pct(78)),
            ],
            insights: vec![
                Insight::new(
                    InsightCategory::Strengths,
                    ["Excellent posture", "Clear speech", "Good eye contact"],
                ),
                Insight::new(
                    InsightCategory::AreasForImprovement,
                    ["Reduce filler words", "More hand gestures", "Smile more often"],
                ),
            ],
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Page;

    #[test]
    fn personal_history_has_exactly_one_new_entry() {
        let dashboard = Dashboard::build(DashboardVariant::Personal);
        let records = dashboard.history.records();
        let new: Vec<_> = records.iter().filter(|r| r.is_new).collect();
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].company, "Your Latest Interview");
        assert_eq!(new[0].analysis_link(), Some(Page::Analysis));
        assert_eq!(records.iter().filter_map(|r| r.analysis_link()).count(), 1);
    }

    #[test]
    fn demo_history_links_nowhere() {
        let dashboard = Dashboard::build(DashboardVariant::Demo);
        let records = dashboard.history.records();
        assert!(records.iter().all(|r| !r.is_new));
        assert!(records.iter().all(|r| r.analysis_link().is_none()));
        assert_eq!(dashboard.history.records()[0].company, "Google");
    }

    #[test]
    fn history_statuses_match_original_labels() {
        let dashboard = Dashboard::build(DashboardVariant::Personal);
        let statuses: Vec<_> = dashboard
            .history
            .records()
            .iter()
            .map(|r| r.status.label())
            .collect();
        assert_eq!(statuses, ["Excellent", "Good", "Outstanding", "Good"]);
    }

    #[test]
    fn dashboards_share_layout() {
        for variant in [DashboardVariant::Personal, DashboardVariant::Demo] {
            let d = Dashboard::build(variant);
            assert_eq!(d.variant, variant);
            assert_eq!(d.metric_cards.len(), 4);
            assert_eq!(d.skills.len(), 6);
            assert_eq!(d.gauges.len(), 3);
            assert_eq!(d.trend.len(), 6);
            assert_eq!(d.history.len(), 4);
        }
    }

    #[test]
    fn demo_skills_differ_from_personal() {
        let personal = Dashboard::build(DashboardVariant::Personal);
        let demo = Dashboard::build(DashboardVariant::Demo);
        assert_eq!(personal.skills[0].score.value(), 91);
        assert_eq!(demo.skills[0].score.value(), 85);
        assert_eq!(demo.metric_cards[3].value, MetricValue::Count(24));
    }

    #[test]
    fn analysis_report_contents() {
        let report = AnalysisReport::sample();
        assert_eq!(report.overall.value(), 87);
        assert_eq!(report.overall_rating, Rating::Excellent);
        assert_eq!(report.key_metrics.len(), 4);
        assert_eq!(report.detailed.len(), 4);
        assert!(report.detailed.iter().all(|m| !m.description.is_empty()));
        assert_eq!(report.insights.len(), 2);
        assert!(report.insights.iter().all(|i| i.items.len() == 4));
    }

    #[test]
    fn sample_analysis_contents() {
        let sample = SampleAnalysis::sample();
        assert_eq!(sample.video_duration, "2:34");
        assert_eq!(sample.gauges[0].score.value(), 87);
        assert_eq!(sample.detailed[2].label, "Gesture Usage");
        assert_eq!(
            sample.insights[1].category,
            InsightCategory::AreasForImprovement
        );
    }
}
