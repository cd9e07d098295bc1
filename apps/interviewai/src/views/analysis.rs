//! Results page for the latest interview.

use interviewai_core::{AnalysisReport, Icon, Page};

use super::components::{badge, insight_card, score_bar, score_gauge};
use super::escape;
use super::icons;
use super::layout::{delay, inert_button, link_button, page};

/// Render `report`.
#[must_use]
pub fn render(report: &AnalysisReport) -> String {
    let mut body = String::new();

    // Top bar
    body.push_str(r#"<nav class="topnav"><div class="topnav-inner"><div class="row">"#);
    body.push_str(&link_button(
        Page::Dashboard.path(),
        Some(Icon::ArrowLeft),
        "Back to Dashboard",
        "btn-ghost",
    ));
    body.push_str(&icons::svg(Icon::Brain, "icon-lg"));
    body.push_str(r#"<span class="brand">Interview Analysis</span></div><div class="row">"#);
    body.push_str(&inert_button(Some(Icon::Share), "Share", "btn-outline"));
    body.push_str(&inert_button(Some(Icon::Download), "Download Report", ""));
    body.push_str("</div></div></nav>");

    body.push_str(r#"<main class="wrap">"#);

    // Overall score
    body.push_str(r#"<section class="center mb-lg rise">"#);
    body.push_str(&badge(Some(Icon::CheckCircle), "Analysis Complete"));
    body.push_str(r#"<h1 class="title" style="margin-top:16px">Your Interview Results</h1><p class="lead mb">AI-powered analysis of your interview performance</p>"#);
    body.push_str(&format!(
        r#"<div class="ring-outer"><div class="ring-inner"><span class="ring-score">{score}</span><span class="muted">{rating}</span></div></div>"#,
        score = report.overall,
        rating = escape(report.overall_rating.label()),
    ));
    body.push_str("</section>");

    // Key metrics
    body.push_str(r#"<h2 class="section">Key Performance Metrics</h2><section class="grid grid-4 mb-lg">"#);
    for (i, gauge) in report.key_metrics.iter().enumerate() {
        body.push_str(&format!(r#"<div class="card">{}</div>"#, score_gauge(gauge, 2 + i as u32)));
    }
    body.push_str("</section>");

    // Detailed analysis
    body.push_str(&format!(r#"<section class="card mb-lg rise" {}>"#, delay(6)));
    body.push_str(r#"<div class="card-title">"#);
    body.push_str(&icons::svg(Icon::BarChart, ""));
    body.push_str(r#"Detailed Analysis</div><p class="card-desc">Comprehensive breakdown of your interview performance</p><div class="grid grid-2">"#);
    for (i, metric) in report.detailed.iter().enumerate() {
        body.push_str(&score_bar(metric, 7 + i as u32));
    }
    body.push_str("</div></section>");

    // Insights
    body.push_str(r#"<section class="grid grid-2 mb-lg">"#);
    for insight in &report.insights {
        body.push_str(&insight_card(insight));
    }
    body.push_str("</section>");

    // Next steps
    body.push_str(r#"<section class="actions">"#);
    body.push_str(&link_button(
        Page::Upload.path(),
        Some(Icon::Upload),
        "Upload Another Video",
        "btn-lg",
    ));
    body.push_str(&link_button(
        Page::Dashboard.path(),
        Some(Icon::BarChart),
        "View Dashboard",
        "btn-lg btn-outline",
    ));
    body.push_str("</section>");

    body.push_str("</main>");

    page(Page::Analysis.title(), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_overall_score_and_rating() {
        let html = render(&AnalysisReport::sample());
        assert!(html.contains(r#"<span class="ring-score">87%</span>"#));
        assert!(html.contains(">Excellent<"));
        assert!(html.contains("Analysis Complete"));
    }

    #[test]
    fn draws_four_gauges_and_four_bars() {
        let html = render(&AnalysisReport::sample());
        assert_eq!(html.matches(r#"class="gauge rise""#).count(), 4);
        assert_eq!(html.matches(r#"class="bar""#).count(), 4);
        assert!(html.contains("Maintained good camera eye contact"));
    }

    #[test]
    fn links_back_to_dashboard_and_upload() {
        let html = render(&AnalysisReport::sample());
        assert!(html.contains(r#"href="/dashboard""#));
        assert!(html.contains(r#"href="/upload""#));
        assert!(html.contains("Strengths"));
        assert!(html.contains("Areas for Improvement"));
    }
}
