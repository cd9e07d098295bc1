//! Reusable widgets: gauges, bars, charts, badges, dialogs.

use interviewai_core::chart::points_attr;
use interviewai_core::{
    CoreError, GaugeGeometry, Gauge, Icon, Insight, LineChart, MetricCard, Page, Percent,
    RadarChart, SampleAnalysis, ScoreMetric, Session, SkillDatum, TrendPoint,
};

use super::escape;
use super::icons;
use super::layout::{delay, link_button, seconds};

/// Grid levels drawn behind both charts.
const GRID_LEVELS: [u32; 5] = [20, 40, 60, 80, 100];

/// Dialog ids, addressed as URL fragments.
pub const SIGN_UP_ID: &str = "sign-up";
pub const SAMPLE_ANALYSIS_ID: &str = "sample-analysis";

/// Where an upload call to action points: the form for members, the sign-up
/// dialog for guests.
#[must_use]
pub fn upload_href(session: Session) -> String {
    if session.logged_in {
        Page::Upload.path().to_string()
    } else {
        format!("#{SIGN_UP_ID}")
    }
}

// =============================================================================
// SCORES
// =============================================================================

/// Circular gauge with the score in the middle and the title below.
#[must_use]
pub fn score_gauge(gauge: &Gauge, tenths_delay: u32) -> String {
    let geometry = GaugeGeometry::default();
    let size = geometry.size();
    let center = geometry.center();
    let circumference = geometry.circumference();

    format!(
        r#"<div class="gauge rise" {delay}><svg viewBox="0 0 {size} {size}" data-score="{score}"><circle class="gauge-track" cx="{center}" cy="{center}" r="{radius}" stroke-width="{stroke}" fill="none"/><circle class="gauge-arc" cx="{center}" cy="{center}" r="{radius}" stroke-width="{stroke}" fill="none" stroke-dasharray="{circ}" stroke-dashoffset="{offset}" style="--circ:{circ};--d:{secs}"/></svg><div class="gauge-value">{percent}</div><div class="gauge-title">{title}</div></div>"#,
        delay = delay(tenths_delay),
        size = size,
        score = gauge.score.value(),
        center = center,
        radius = geometry.radius,
        stroke = geometry.stroke_width,
        circ = circumference,
        offset = geometry.dash_offset(gauge.score),
        secs = seconds(tenths_delay),
        percent = gauge.score,
        title = escape(&gauge.title),
    )
}

/// Horizontal bar: label and score on top, filled track below, optional
/// description under it.
#[must_use]
pub fn score_bar(metric: &ScoreMetric, tenths_delay: u32) -> String {
    let description = if metric.description.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="faint">{}</p>"#,
            escape(&metric.description)
        )
    };
    let big = if metric.description.is_empty() { "" } else { " big" };
    let tall = if metric.description.is_empty() { "" } else { " tall" };

    format!(
        r#"<div class="bar"><div class="bar-head"><span class="muted">{label}</span><span class="bar-score{big}">{score}</span></div><div class="bar-track{tall}"><div class="bar-fill" style="width:{width};--d:{secs}"></div></div>{description}</div>"#,
        label = escape(&metric.label),
        big = big,
        score = metric.score,
        tall = tall,
        width = metric.score.css_width(),
        secs = seconds(tenths_delay),
        description = description,
    )
}

/// Small rounded label.
#[must_use]
pub fn badge(icon: Option<Icon>, label: &str) -> String {
    let icon = icon.map(|i| icons::svg(i, "icon-sm")).unwrap_or_default();
    format!(r#"<span class="badge">{icon}{}</span>"#, escape(label))
}

/// Key-metric card. `locked` adds the sign-up overlay.
#[must_use]
pub fn metric_card(card: &MetricCard, locked: bool, tenths_delay: u32) -> String {
    let lock = if locked { lock_overlay() } else { String::new() };
    let class = if locked { "card lift locked rise" } else { "card lift rise" };
    format!(
        r#"<div class="{class}" {delay}>{lock}<div class="card-title small">{title_icon}{title}</div><div class="metric-value">{value}</div><div class="metric-caption">{caption_icon}{caption}</div></div>"#,
        class = class,
        delay = delay(tenths_delay),
        lock = lock,
        title_icon = icons::svg(card.icon, "icon-sm"),
        title = escape(&card.title),
        value = card.value,
        caption_icon = icons::svg(card.caption_icon, "icon-sm"),
        caption = escape(&card.caption),
    )
}

/// Overlay shown on hover over a locked demo card.
#[must_use]
pub fn lock_overlay() -> String {
    format!(
        r##"<a class="lock-overlay" href="#{SIGN_UP_ID}">{}<span>Sign up to unlock</span></a>"##,
        icons::svg(Icon::Lock, "icon-lg"),
    )
}

/// Bulleted insight list under its category heading.
#[must_use]
pub fn insight_card(insight: &Insight) -> String {
    let mut html = String::new();
    html.push_str(r#"<div class="card"><div class="card-title">"#);
    html.push_str(&icons::svg(insight.category.icon(), ""));
    html.push_str(&escape(insight.category.label()));
    html.push_str(r#"</div><ul class="insights">"#);
    for item in &insight.items {
        html.push_str(r#"<li><span class="bullet"></span>"#);
        html.push_str(&escape(item));
        html.push_str("</li>");
    }
    html.push_str("</ul></div>");
    html
}

// =============================================================================
// CHARTS
// =============================================================================

/// Performance trend as an SVG polyline with month labels.
pub fn line_chart(series: &[TrendPoint]) -> Result<String, CoreError> {
    let chart = LineChart::default();
    let points = chart.points(series)?;

    let mut svg = format!(
        r#"<div class="chart"><svg viewBox="0 0 {w} {h}" role="img" aria-label="Performance trend">"#,
        w = chart.width,
        h = chart.height,
    );
    let right = chart.width - chart.padding;
    for level in GRID_LEVELS {
        let y = chart.level_y(Percent::new(level));
        svg.push_str(&format!(
            r#"<line class="grid-line" x1="{left}" y1="{y}" x2="{right}" y2="{y}"/>"#,
            left = chart.padding,
        ));
    }
    svg.push_str(&format!(
        r#"<polyline class="series" points="{}"/>"#,
        points_attr(&points)
    ));
    for (point, entry) in points.iter().zip(series) {
        svg.push_str(&format!(
            r#"<circle class="dot" cx="{x}" cy="{y}" r="4"><title>{label}: {score}</title></circle>"#,
            x = point.x,
            y = point.y,
            label = escape(&entry.label),
            score = entry.score,
        ));
        svg.push_str(&format!(
            r#"<text x="{x}" y="{bottom}" text-anchor="middle">{label}</text>"#,
            x = point.x,
            bottom = chart.height - 4,
            label = escape(&entry.label),
        ));
    }
    svg.push_str("</svg></div>");
    Ok(svg)
}

/// Skill breakdown as a radar chart.
pub fn radar_chart(skills: &[SkillDatum]) -> Result<String, CoreError> {
    let chart = RadarChart::default();
    let count = skills.len();
    let center = chart.center();

    let mut svg = format!(
        r#"<div class="chart"><svg viewBox="0 0 {s} {s}" role="img" aria-label="Skills breakdown">"#,
        s = chart.size,
    );
    for level in GRID_LEVELS {
        let ring = chart.ring(count, Percent::new(level))?;
        svg.push_str(&format!(
            r#"<polygon class="radar-grid" points="{}"/>"#,
            points_attr(&ring)
        ));
    }
    for end in chart.spokes(count)? {
        svg.push_str(&format!(
            r#"<line class="radar-grid" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            center.x, center.y, end.x, end.y
        ));
    }
    svg.push_str(&format!(
        r#"<polygon class="radar-area" points="{}"/>"#,
        points_attr(&chart.polygon(skills)?)
    ));
    for (anchor, skill) in chart.label_anchors(count)?.iter().zip(skills) {
        let align = match anchor.x.cmp(&center.x) {
            std::cmp::Ordering::Less => "end",
            std::cmp::Ordering::Equal => "middle",
            std::cmp::Ordering::Greater => "start",
        };
        svg.push_str(&format!(
            r#"<text x="{x}" y="{y}" text-anchor="{align}" dominant-baseline="middle">{label}</text>"#,
            x = anchor.x,
            y = anchor.y,
            align = align,
            label = escape(&skill.skill),
        ));
    }
    svg.push_str("</svg></div>");
    Ok(svg)
}

// =============================================================================
// DIALOGS
// =============================================================================

/// A dialog opened by navigating to `#id` and closed by the close link.
#[must_use]
pub fn modal(id: &str, title: &str, body: &str, small: bool) -> String {
    let size = if small { " small" } else { "" };
    format!(
        r##"<div class="modal" id="{id}" role="dialog" aria-modal="true" aria-labelledby="{id}-title"><div class="modal-box{size}"><div class="row" style="justify-content:space-between"><h2 class="modal-title" id="{id}-title">{title}</h2><a class="btn btn-ghost" href="#" aria-label="Close">&times;</a></div>{body}</div></div>"##,
        id = id,
        size = size,
        title = escape(title),
        body = body,
    )
}

/// Sign-up dialog. Submitting it logs the visitor in.
#[must_use]
pub fn sign_up_modal() -> String {
    let body = format!(
        r#"<p class="muted">Create a free account to upload interviews and see your personal analytics.</p><form method="post" action="/login" class="grid">{name}{email}<button type="submit" class="btn btn-block">{icon}Sign Up</button></form>"#,
        name = text_field("signup-name", "name", "Full Name", "text", Icon::User, ""),
        email = text_field("signup-email", "email", "Email", "email", Icon::Mail, ""),
        icon = icons::svg(Icon::User, "icon-sm"),
    );
    modal(SIGN_UP_ID, "Sign Up", &body, true)
}

/// Labelled input with a leading icon. Always `required`.
#[must_use]
pub fn text_field(
    id: &str,
    name: &str,
    label: &str,
    kind: &str,
    icon: Icon,
    value: &str,
) -> String {
    format!(
        r#"<div class="field"><label for="{id}">{label}</label><div class="input-wrap">{icon}<input class="input" id="{id}" name="{name}" type="{kind}" value="{value}" placeholder="Enter your {lower}" required/></div></div>"#,
        id = id,
        label = escape(label),
        icon = icons::svg(icon, ""),
        name = name,
        kind = kind,
        value = escape(value),
        lower = escape(&label.to_lowercase()),
    )
}

/// The home page's sample analysis dialog. Its call to action follows
/// `upload_href`.
#[must_use]
pub fn sample_analysis_modal(sample: &SampleAnalysis, session: Session) -> String {
    let mut body = String::new();

    body.push_str(r#"<div class="grid grid-2">"#);

    // Video placeholder and gauges
    body.push_str(r#"<div class="card"><div class="card-title">"#);
    body.push_str(&icons::svg(Icon::Video, ""));
    body.push_str(r#"Interview Video</div><div class="video-frame">"#);
    body.push_str(&icons::svg(Icon::Play, "icon-xl"));
    body.push_str(r#"<span class="muted">Sample Interview Video</span><span class="faint">Duration: "#);
    body.push_str(&escape(&sample.video_duration));
    body.push_str(r#"</span></div><div class="grid grid-3">"#);
    for (i, gauge) in sample.gauges.iter().enumerate() {
        body.push_str(&score_gauge(gauge, i as u32 * 2));
    }
    body.push_str("</div></div>");

    // Detailed bars
    body.push_str(r#"<div class="card"><div class="card-title">"#);
    body.push_str(&icons::svg(Icon::BarChart, ""));
    body.push_str(r#"Detailed Analysis</div><div class="grid">"#);
    for (i, metric) in sample.detailed.iter().enumerate() {
        body.push_str(&score_bar(metric, 5 + i as u32 * 2));
    }
    body.push_str("</div></div>");

    body.push_str("</div>");

    body.push_str(r#"<div class="grid grid-2">"#);
    for insight in &sample.insights {
        body.push_str(&insight_card(insight));
    }
    body.push_str("</div>");

    body.push_str(r#"<div class="actions">"#);
    body.push_str(&link_button(
        &upload_href(session),
        Some(Icon::Upload),
        "Analyze Your Interview",
        "btn-lg",
    ));
    body.push_str("</div>");

    modal(SAMPLE_ANALYSIS_ID, "Sample Interview Analysis", &body, false)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use interviewai_core::catalog::performance_trend;
    use interviewai_core::{Dashboard, DashboardVariant};

    #[test]
    fn gauge_offsets_arc_by_score() {
        let html = score_gauge(&Gauge::new("Confidence", Percent::new(50)), 0);
        assert!(html.contains(r#"stroke-dasharray="251.32""#));
        assert!(html.contains(r#"stroke-dashoffset="125.66""#));
        assert!(html.contains(">50%<"));
        assert!(html.contains("Confidence"));
    }

    #[test]
    fn full_gauge_has_no_offset() {
        let html = score_gauge(&Gauge::new("All", Percent::FULL), 0);
        assert!(html.contains(r#"stroke-dashoffset="0.00""#));
    }

    #[test]
    fn bar_width_matches_score() {
        let html = score_bar(
            &ScoreMetric::new("Eye Contact", Percent::new(82), "Held the gaze"),
            0,
        );
        assert!(html.contains("width:82%"));
        assert!(html.contains("Held the gaze"));
        let bare = score_bar(&ScoreMetric::bare("Gesture Usage", Percent::new(78)), 0);
        assert!(!bare.contains(r#"class="faint""#));
    }

    #[test]
    fn line_chart_has_one_dot_per_month() {
        let html = line_chart(&performance_trend()).unwrap();
        assert_eq!(html.matches(r#"class="dot""#).count(), 6);
        assert!(html.contains(">Jan<"));
        assert!(html.contains("<polyline"));
    }

    #[test]
    fn empty_trend_is_an_error() {
        assert_eq!(line_chart(&[]), Err(CoreError::EmptySeries));
    }

    #[test]
    fn radar_chart_labels_every_skill() {
        let dashboard = Dashboard::build(DashboardVariant::Personal);
        let html = radar_chart(&dashboard.skills).unwrap();
        for skill in &dashboard.skills {
            assert!(html.contains(&format!(">{}<", skill.skill)));
        }
        assert_eq!(html.matches(r#"class="radar-area""#).count(), 1);
    }

    #[test]
    fn radar_chart_rejects_five_axes() {
        let skills: Vec<_> = (0..5)
            .map(|i| SkillDatum::new(format!("s{i}"), Percent::new(50)))
            .collect();
        assert_eq!(
            radar_chart(&skills),
            Err(CoreError::UnsupportedAxisCount(5))
        );
    }

    #[test]
    fn modal_is_addressable_by_fragment() {
        let html = modal("demo", "Title", "<p>x</p>", true);
        assert!(html.contains(r#"id="demo""#));
        assert!(html.contains(r##"href="#""##));
    }

    #[test]
    fn sign_up_posts_to_login() {
        let html = sign_up_modal();
        assert!(html.contains(r#"action="/login""#));
        assert!(html.contains(r#"id="sign-up""#));
    }

    #[test]
    fn sample_modal_shows_duration_and_insights() {
        let html = sample_analysis_modal(&SampleAnalysis::sample(), Session::guest());
        assert!(html.contains("Duration: 2:34"));
        assert!(html.contains("Reduce filler words"));
        assert!(html.contains("Areas for Improvement"));
    }

    #[test]
    fn sample_modal_action_depends_on_login() {
        let guest = sample_analysis_modal(&SampleAnalysis::sample(), Session::guest());
        assert!(guest.contains(r##"href="#sign-up""##));
        assert!(!guest.contains(r#"href="/upload""#));

        let member = sample_analysis_modal(&SampleAnalysis::sample(), Session::member());
        assert!(member.contains(r#"href="/upload""#));
        assert!(!member.contains(r##"href="#sign-up""##));
    }
}
