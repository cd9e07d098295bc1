//! Personal and demo dashboards.
//!
//! Both variants share one layout. The demo variant adds a banner, locks
//! every card behind the sign-up dialog, and never links a history row.

use interviewai_core::{CoreError, Dashboard, Icon, InterviewRecord, Page};

use super::components::{
    SIGN_UP_ID, badge, line_chart, lock_overlay, metric_card, radar_chart, score_gauge,
    sign_up_modal,
};
use super::escape;
use super::icons;
use super::layout::{delay, inert_button, link_button, page, post_button};

/// Render `dashboard`.
pub fn render(dashboard: &Dashboard) -> Result<String, CoreError> {
    let demo = dashboard.variant.is_demo();
    let sign_up = format!("#{SIGN_UP_ID}");
    let mut body = String::new();

    // Top bar
    body.push_str(r#"<nav class="topnav"><div class="topnav-inner"><div class="row">"#);
    body.push_str(&link_button(
        Page::Home.path(),
        Some(Icon::ArrowLeft),
        "Back to Home",
        "btn-ghost",
    ));
    body.push_str(&icons::svg(Icon::Brain, "icon-lg"));
    body.push_str(r#"<span class="brand">InterviewAI Dashboard</span></div><div class="row">"#);
    if demo {
        body.push_str(&link_button(&sign_up, Some(Icon::Upload), "Upload Video", ""));
        body.push_str(&link_button(
            &sign_up,
            Some(Icon::Lock),
            "Export Report",
            "btn-outline btn-muted",
        ));
        body.push_str(&link_button(&sign_up, Some(Icon::User), "Sign Up", ""));
    } else {
        body.push_str(&link_button(
            Page::Upload.path(),
            Some(Icon::Upload),
            "Upload Video",
            "",
        ));
        body.push_str(&inert_button(
            Some(Icon::Download),
            "Export Report",
            "btn-outline",
        ));
        body.push_str(&post_button("/logout", Some(Icon::LogOut), "Logout", "btn-ghost"));
    }
    body.push_str("</div></div></nav>");

    if demo {
        body.push_str(r#"<div class="banner">"#);
        body.push_str(&icons::svg(Icon::Lock, "icon-sm"));
        body.push_str("<span>Demo Dashboard - Sign up to access your personal analytics</span>");
        body.push_str(&link_button(&sign_up, None, "Sign Up Now", "btn-ghost"));
        body.push_str("</div>");
    }

    body.push_str(r#"<main class="wrap">"#);

    // Heading
    body.push_str(r#"<div class="mb rise"><h1 class="title">"#);
    body.push_str(&escape(&dashboard.heading));
    body.push_str(r#"</h1><p class="lead">"#);
    body.push_str(&escape(&dashboard.subheading));
    body.push_str("</p></div>");

    // Key metrics
    body.push_str(r#"<section class="grid grid-4 mb">"#);
    for (i, card) in dashboard.metric_cards.iter().enumerate() {
        body.push_str(&metric_card(card, demo, i as u32));
    }
    body.push_str("</section>");

    // Charts
    body.push_str(r#"<section class="grid grid-2 mb">"#);
    body.push_str(&chart_card(
        "Performance Trend",
        &dashboard.trend_caption,
        Icon::TrendingUp,
        &line_chart(&dashboard.trend)?,
        demo,
        4,
    ));
    body.push_str(&chart_card(
        "Skills Breakdown",
        "Your performance across different skill areas",
        Icon::Brain,
        &radar_chart(&dashboard.skills)?,
        demo,
        5,
    ));
    body.push_str("</section>");

    // Latest interview gauges
    let locked = if demo { " locked" } else { "" };
    body.push_str(&format!(r#"<section class="card mb{locked} rise" {}>"#, delay(6)));
    if demo {
        body.push_str(&lock_overlay());
    }
    body.push_str(r#"<div class="card-title">"#);
    body.push_str(&icons::svg(Icon::Award, ""));
    body.push_str(r#"Latest Interview Analysis</div><p class="card-desc">Detailed breakdown of your most recent interview performance</p><div class="grid grid-3">"#);
    for (i, gauge) in dashboard.gauges.iter().enumerate() {
        body.push_str(&score_gauge(gauge, 7 + i as u32 * 2));
    }
    body.push_str("</div></section>");

    // Recent interviews
    body.push_str(&format!(r#"<section class="card rise" {}>"#, delay(8)));
    body.push_str(r#"<div class="card-title">"#);
    body.push_str(&icons::svg(Icon::Calendar, ""));
    body.push_str(r#"Recent Interviews</div><p class="card-desc">"#);
    body.push_str(&escape(&dashboard.history_caption));
    body.push_str(r#"</p><div class="history">"#);
    for record in dashboard.history.records() {
        body.push_str(&history_row(record, demo));
    }
    body.push_str("</div></section>");

    body.push_str("</main>");

    if demo {
        body.push_str(&sign_up_modal());
    }

    let title = if demo {
        Page::DemoDashboard.title()
    } else {
        Page::Dashboard.title()
    };
    Ok(page(title, &body))
}

fn chart_card(
    title: &str,
    caption: &str,
    icon: Icon,
    chart: &str,
    locked: bool,
    tenths_delay: u32,
) -> String {
    let (class, lock) = if locked {
        ("card locked rise", lock_overlay())
    } else {
        ("card rise", String::new())
    };
    format!(
        r#"<div class="{class}" {delay}>{lock}<div class="card-title">{icon}{title}</div><p class="card-desc">{caption}</p>{chart}</div>"#,
        class = class,
        delay = delay(tenths_delay),
        lock = lock,
        icon = icons::svg(icon, ""),
        title = escape(title),
        caption = escape(caption),
        chart = chart,
    )
}

/// One history row. The action is a link only for records that have one.
fn history_row(record: &InterviewRecord, demo: bool) -> String {
    let new_badge = if record.is_new {
        badge(None, "New")
    } else {
        String::new()
    };
    let action = match (demo, record.analysis_link()) {
        (true, _) => link_button(
            &format!("#{SIGN_UP_ID}"),
            Some(Icon::Lock),
            "Sign Up to View",
            "btn-ghost",
        ),
        (false, Some(target)) => {
            link_button(target.path(), Some(Icon::Eye), "View Analysis", "")
        }
        (false, None) => r#"<span class="faint">Sample Data</span>"#.to_string(),
    };
    format!(
        r#"<div class="history-row"><div class="row"><div class="score-dot">{score}</div><div><div class="row"><strong>{company}</strong>{new_badge}</div><div class="faint">{date}</div></div></div><div class="row">{status}{action}</div></div>"#,
        score = record.score.value(),
        company = escape(&record.company),
        new_badge = new_badge,
        date = escape(&record.date),
        status = badge(None, record.status.label()),
        action = action,
    )
}
