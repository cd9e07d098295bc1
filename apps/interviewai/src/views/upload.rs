//! Upload form and the processing panel shown after a valid submit.

use interviewai_core::{Icon, PROCESSING_STEPS, Page, ProcessingTimeline};

use super::components::text_field;
use super::escape;
use super::icons;
use super::layout::{link_button, page};
use crate::forms::UploadForm;

/// Render the upload form, optionally with a validation message.
#[must_use]
pub fn render_form(form: &UploadForm, error: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str(&top_bar());

    body.push_str(r#"<main class="wrap wrap-narrow"><section class="center mb rise"><h1 class="title">Upload Your Interview</h1><p class="lead">Get AI-powered feedback on your interview performance</p></section>"#);

    body.push_str(r#"<section class="card rise"><div class="card-title">"#);
    body.push_str(&icons::svg(Icon::Video, ""));
    body.push_str(r#"Interview Details</div><p class="card-desc">Tell us who you are, then choose a video to analyze</p>"#);

    if let Some(message) = error {
        body.push_str(r#"<div class="alert mb" role="alert">"#);
        body.push_str(&escape(message));
        body.push_str("</div>");
    }

    body.push_str(r#"<form class="grid" method="post" action="/upload" enctype="application/x-www-form-urlencoded">"#);
    body.push_str(r#"<div class="grid grid-2">"#);
    body.push_str(&text_field(
        "upload-name",
        "name",
        "Full Name",
        "text",
        Icon::User,
        &form.name,
    ));
    body.push_str(&text_field(
        "upload-email",
        "email",
        "Email",
        "email",
        Icon::Mail,
        &form.email,
    ));
    body.push_str("</div>");

    body.push_str(r#"<label class="dropzone" for="upload-video">"#);
    body.push_str(&icons::svg(Icon::Upload, "icon-xl"));
    body.push_str(r#"<p>Drop your interview video here, or click to browse</p><p class="faint">MP4, MOV, AVI up to 100MB</p><input id="upload-video" type="file" accept="video/*" hidden/></label>"#);

    body.push_str(r#"<button type="submit" class="btn btn-block btn-lg">"#);
    body.push_str(&icons::svg(Icon::Brain, "icon-sm"));
    body.push_str("Upload and Analyze</button></form></section></main>");

    page(Page::Upload.title(), &body)
}

/// Render the processing panel that replays `timeline` from the progress
/// stream.
#[must_use]
pub fn render_processing(timeline: &ProcessingTimeline) -> String {
    let mut body = String::new();
    body.push_str(&top_bar());

    body.push_str(r#"<main class="wrap wrap-narrow"><section class="center mb rise"><h1 class="title">Analyzing Your Interview</h1><p class="lead">Hang tight while we review your performance</p></section>"#);

    body.push_str(r#"<section class="processing" id="processing"><div class="step-icon">"#);
    for (i, step) in PROCESSING_STEPS.iter().enumerate() {
        let hidden = if i == 0 { "" } else { " hidden" };
        body.push_str(&format!(
            r#"<span data-step="{i}"{hidden}>{}</span>"#,
            icons::svg(step.icon, "icon-lg")
        ));
    }
    let first = PROCESSING_STEPS.first().map(|s| s.label).unwrap_or_default();
    body.push_str(&format!(
        r#"</div><h3 id="step-label">{}</h3><div class="progress"><div class="progress-fill" id="progress-fill" style="width:0%"></div></div><p class="muted"><span id="progress-pct">0%</span> complete</p><div class="dots">"#,
        escape(first)
    ));
    for i in 0..PROCESSING_STEPS.len() {
        let on = if i == 0 { " on" } else { "" };
        body.push_str(&format!(r#"<span class="dot-step{on}"></span>"#));
    }
    body.push_str("</div></section></main>");

    // Script-less browsers wait out the same duration.
    let seconds = timeline.total_duration_ms().div_ceil(1000);
    body.push_str(&format!(
        r#"<noscript><meta http-equiv="refresh" content="{seconds};url={}"/></noscript>"#,
        timeline.destination().path()
    ));
    body.push_str(PROGRESS_SCRIPT);

    page(Page::Upload.title(), &body)
}

fn top_bar() -> String {
    let mut html = String::new();
    html.push_str(r#"<nav class="topnav"><div class="topnav-inner"><div class="row">"#);
    html.push_str(&link_button(
        Page::Dashboard.path(),
        Some(Icon::ArrowLeft),
        "Back to Dashboard",
        "btn-ghost",
    ));
    html.push_str(&icons::svg(Icon::Brain, "icon-lg"));
    html.push_str(r#"<span class="brand">InterviewAI</span></div></div></nav>"#);
    html
}

/// Listens on the progress stream and updates the panel.
const PROGRESS_SCRIPT: &str = r#"<script>
(function () {
  var source = new EventSource("/upload/progress");
  var label = document.getElementById("step-label");
  var fill = document.getElementById("progress-fill");
  var pct = document.getElementById("progress-pct");
  var dots = document.querySelectorAll(".dot-step");
  var icons = document.querySelectorAll("[data-step]");
  source.addEventListener("step", function (e) {
    var data = JSON.parse(e.data);
    label.textContent = data.label;
    icons.forEach(function (el) { el.hidden = Number(el.dataset.step) !== data.step; });
    dots.forEach(function (el, i) { el.classList.toggle("on", i <= data.step); });
  });
  source.addEventListener("progress", function (e) {
    var data = JSON.parse(e.data);
    fill.style.width = data.percent + "%";
    pct.textContent = data.percent + "%";
  });
  source.addEventListener("redirect", function (e) {
    var data = JSON.parse(e.data);
    source.close();
    window.location.assign(data.location);
  });
})();
</script>"#;
