//! Landing page.

use interviewai_core::auth::dashboard_for;
use interviewai_core::{Icon, SampleAnalysis, Session};

use super::components::{
    SAMPLE_ANALYSIS_ID, SIGN_UP_ID, sample_analysis_modal, sign_up_modal, upload_href,
};
use super::icons;
use super::layout::{delay, link_button, page, post_button};

const FEATURES: [(Icon, &str, &str); 3] = [
    (
        Icon::Eye,
        "Body Language",
        "Posture, gestures, and eye contact scored frame by frame.",
    ),
    (
        Icon::Mic,
        "Speech Analysis",
        "Clarity, pace, and filler words measured across the whole answer.",
    ),
    (
        Icon::Brain,
        "Actionable Insights",
        "Strengths and areas for improvement you can work on before the next round.",
    ),
];

/// Render the landing page for `session`.
#[must_use]
pub fn render(session: Session, sample: &SampleAnalysis) -> String {
    let mut body = String::new();

    // Top bar
    body.push_str(r#"<nav class="topnav"><div class="topnav-inner"><div class="row">"#);
    body.push_str(&icons::svg(Icon::Brain, "icon-lg"));
    body.push_str(r#"<span class="brand">InterviewAI</span></div><div class="row">"#);
    body.push_str(&link_button(
        dashboard_for(session).path(),
        Some(Icon::BarChart),
        "Dashboard",
        "btn-ghost",
    ));
    if session.logged_in {
        body.push_str(&post_button("/logout", Some(Icon::LogOut), "Logout", "btn-ghost"));
    } else {
        body.push_str(&link_button(
            &format!("#{SIGN_UP_ID}"),
            Some(Icon::User),
            "Sign Up",
            "",
        ));
    }
    body.push_str("</div></div></nav>");

    // Hero
    body.push_str(r#"<section class="hero"><h1 class="title rise">Ace Your Next Interview with AI</h1>"#);
    body.push_str(&format!(
        r#"<p class="lead rise" {}>Upload a recording of your mock interview and get instant feedback on body language, speech, and confidence.</p>"#,
        delay(2)
    ));
    body.push_str(&format!(r#"<div class="actions rise" {}>"#, delay(4)));
    body.push_str(&link_button(
        &upload_href(session),
        Some(Icon::Upload),
        "Upload Interview",
        "btn-lg",
    ));
    body.push_str(&link_button(
        &format!("#{SAMPLE_ANALYSIS_ID}"),
        Some(Icon::Play),
        "View Sample Analysis",
        "btn-lg btn-outline",
    ));
    body.push_str("</div></section>");

    // Features
    body.push_str(r#"<main class="wrap"><h2 class="section">How It Works</h2><div class="grid grid-3">"#);
    for (i, (icon, title, text)) in FEATURES.iter().enumerate() {
        body.push_str(&format!(
            r#"<div class="card lift rise" {delay}><div class="card-title">{icon}{title}</div><p class="muted">{text}</p></div>"#,
            delay = delay(6 + i as u32 * 2),
            icon = icons::svg(*icon, ""),
            title = title,
            text = text,
        ));
    }
    body.push_str("</div></main>");

    body.push_str(&sample_analysis_modal(sample, session));
    if !session.logged_in {
        body.push_str(&sign_up_modal());
    }

    page("InterviewAI", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_sees_sign_up_and_demo_link() {
        let html = render(Session::guest(), &SampleAnalysis::sample());
        assert!(html.contains(r#"href="/demo-dashboard""#));
        assert!(html.contains(r#"id="sign-up""#));
        assert!(!html.contains(r#"action="/logout""#));
        assert!(!html.contains(r#"href="/upload""#));
    }

    #[test]
    fn member_sees_upload_and_logout() {
        let html = render(Session::member(), &SampleAnalysis::sample());
        assert!(html.contains(r#"href="/dashboard""#));
        assert!(html.contains(r#"href="/upload""#));
        assert!(html.contains(r#"action="/logout""#));
        assert!(!html.contains(r#"id="sign-up""#));
    }

    #[test]
    fn every_fragment_link_has_a_dialog() {
        for session in [Session::guest(), Session::member()] {
            let html = render(session, &SampleAnalysis::sample());
            for id in [SIGN_UP_ID, SAMPLE_ANALYSIS_ID] {
                let linked = html.contains(&format!(r##"href="#{id}""##));
                let present = html.contains(&format!(r#"id="{id}""#));
                assert!(!linked || present, "#{id} linked without a dialog");
            }
        }
    }

    #[test]
    fn member_sample_dialog_leads_to_upload() {
        let html = render(Session::member(), &SampleAnalysis::sample());
        assert!(!html.contains(r##"href="#sign-up""##));
        assert!(html.matches(r#"href="/upload""#).count() >= 2);
    }

    #[test]
    fn sample_dialog_is_always_present() {
        for session in [Session::guest(), Session::member()] {
            let html = render(session, &SampleAnalysis::sample());
            assert!(html.contains(r#"id="sample-analysis""#));
            assert!(html.contains(r##"href="#sample-analysis""##));
        }
    }
}
