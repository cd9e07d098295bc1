//! Page shell and shared stylesheet.

use interviewai_core::Icon;

use super::escape;
use super::icons;

/// Wrap `body` in the document shell.
#[must_use]
pub fn page(title: &str, body: &str) -> String {
    let mut html = String::with_capacity(STYLESHEET.len() + body.len() + 512);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"/>");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\"/>");
    html.push_str("<title>");
    html.push_str(&escape(title));
    html.push_str("</title>");
    html.push_str(STYLESHEET);
    html.push_str("</head>\n<body>\n");
    html.push_str(BACKDROP);
    html.push_str(body);
    html.push_str("\n</body>\n</html>");
    html
}

/// A link styled as a button, with a leading icon.
#[must_use]
pub fn link_button(href: &str, icon: Option<Icon>, label: &str, class: &str) -> String {
    let icon = icon.map(|i| icons::svg(i, "icon-sm")).unwrap_or_default();
    format!(
        r#"<a class="btn {class}" href="{href}">{icon}{label}</a>"#,
        class = class,
        href = escape(href),
        icon = icon,
        label = escape(label),
    )
}

/// A form that POSTs to `action` with a single submit button.
#[must_use]
pub fn post_button(action: &str, icon: Option<Icon>, label: &str, class: &str) -> String {
    let icon = icon.map(|i| icons::svg(i, "icon-sm")).unwrap_or_default();
    format!(
        r#"<form class="inline" method="post" action="{action}"><button type="submit" class="btn {class}">{icon}{label}</button></form>"#,
        action = escape(action),
        class = class,
        icon = icon,
        label = escape(label),
    )
}

/// A button that does nothing (sample-only actions).
#[must_use]
pub fn inert_button(icon: Option<Icon>, label: &str, class: &str) -> String {
    let icon = icon.map(|i| icons::svg(i, "icon-sm")).unwrap_or_default();
    format!(
        r#"<button type="button" class="btn {class}">{icon}{label}</button>"#,
        class = class,
        icon = icon,
        label = escape(label),
    )
}

/// Animation delay attribute in tenths of a second, e.g. `style="--d:0.3s"`.
#[must_use]
pub fn delay(tenths: u32) -> String {
    format!(r#"style="--d:{}""#, seconds(tenths))
}

/// Tenths of a second as a CSS time.
#[must_use]
pub fn seconds(tenths: u32) -> String {
    format!("{}.{}s", tenths / 10, tenths % 10)
}

const BACKDROP: &str = r#"<div class="backdrop" aria-hidden="true"><div class="blob blob-a"></div><div class="blob blob-b"></div></div>
"#;

/// Dark gray gradient theme, glass cards, entrance animations.
const STYLESHEET: &str = r##"<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{
  --bg:linear-gradient(135deg,#000 0%,#111827 50%,#1f2937 100%);
  --card:rgba(17,24,39,.5);
  --card-hover:rgba(31,41,55,.5);
  --border:rgba(55,65,81,.5);
  --border-strong:#4b5563;
  --text:#fff;
  --text-soft:#d1d5db;
  --text-muted:#9ca3af;
  --text-faint:#6b7280;
  --track:#374151;
  --fill:linear-gradient(90deg,#6b7280,#374151);
  --radius:12px;
}
html{scroll-behavior:smooth}
body{min-height:100vh;background:var(--bg);color:var(--text);font-family:ui-sans-serif,system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;line-height:1.5;position:relative;overflow-x:hidden}
a{color:inherit;text-decoration:none}
.backdrop{position:fixed;inset:0;pointer-events:none;z-index:0}
.blob{position:absolute;border-radius:50%;filter:blur(24px);animation:pulse 4s ease-in-out infinite}
.blob-a{top:80px;left:40px;width:128px;height:128px;background:rgba(55,65,81,.1)}
.blob-b{bottom:80px;right:40px;width:192px;height:192px;background:rgba(75,85,99,.1);animation-delay:1s}
.wrap{max-width:80rem;margin:0 auto;padding:24px;position:relative;z-index:1}
.wrap-narrow{max-width:56rem}
.topnav{padding:24px;border-bottom:1px solid rgba(31,41,55,.5);backdrop-filter:blur(4px);position:relative;z-index:1}
.topnav-inner{max-width:80rem;margin:0 auto;display:flex;justify-content:space-between;align-items:center;gap:16px;flex-wrap:wrap}
.row{display:flex;align-items:center;gap:12px;flex-wrap:wrap}
.brand{font-size:1.5rem;font-weight:700;background:linear-gradient(90deg,#fff,#9ca3af);-webkit-background-clip:text;background-clip:text;color:transparent}
.banner{position:relative;z-index:1;background:linear-gradient(90deg,rgba(31,41,55,.5),rgba(55,65,81,.5));border-bottom:1px solid rgba(75,85,99,.5);padding:12px 24px;display:flex;justify-content:center;align-items:center;gap:8px;font-size:.875rem;color:var(--text-soft)}
h1.title{font-size:2.5rem;font-weight:700;margin-bottom:8px;background:linear-gradient(90deg,#fff,#d1d5db);-webkit-background-clip:text;background-clip:text;color:transparent}
h2.section{font-size:1.875rem;font-weight:700;text-align:center;margin-bottom:32px;background:linear-gradient(90deg,#fff,#d1d5db);-webkit-background-clip:text;background-clip:text;color:transparent}
.lead{font-size:1.125rem;color:var(--text-soft)}
.center{text-align:center}
.mb{margin-bottom:32px}
.mb-lg{margin-bottom:48px}
.grid{display:grid;gap:24px}
.grid-2{grid-template-columns:repeat(auto-fit,minmax(320px,1fr))}
.grid-3{grid-template-columns:repeat(auto-fit,minmax(200px,1fr))}
.grid-4{grid-template-columns:repeat(auto-fit,minmax(180px,1fr))}
.card{background:var(--card);border:1px solid var(--border);border-radius:var(--radius);backdrop-filter:blur(4px);padding:24px;position:relative;transition:all .3s}
.card:hover{background:var(--card-hover)}
.card-title{display:flex;align-items:center;gap:8px;font-weight:600;color:var(--text);margin-bottom:4px}
.card-title.small{font-size:.875rem;font-weight:500;color:var(--text-soft)}
.card-desc{color:var(--text-muted);font-size:.875rem;margin-bottom:16px}
.metric-value{font-size:1.875rem;font-weight:700;margin:8px 0 4px}
.metric-caption{display:flex;align-items:center;gap:4px;color:var(--text-muted);font-size:.875rem}
.lift{cursor:pointer}
.lift:hover{transform:translateY(-8px) scale(1.02)}
.btn{display:inline-flex;align-items:center;gap:8px;padding:8px 16px;border-radius:8px;border:1px solid var(--border-strong);background:linear-gradient(90deg,#374151,#111827);color:var(--text);font-size:.875rem;font-weight:500;cursor:pointer;transition:all .3s;font-family:inherit}
.btn:hover{transform:scale(1.05);background:linear-gradient(90deg,#4b5563,#1f2937)}
.btn-ghost{background:transparent;border-color:var(--border);color:var(--text-muted)}
.btn-ghost:hover{color:var(--text);background:rgba(31,41,55,.5);transform:none}
.btn-outline{background:transparent}
.btn-lg{font-size:1.125rem;padding:14px 32px}
.btn-block{width:100%;justify-content:center;padding:12px}
.btn-muted{opacity:.5;cursor:default}
.btn-muted:hover{transform:none;background:transparent}
form.inline{display:inline}
.badge{display:inline-flex;align-items:center;gap:6px;padding:2px 10px;border-radius:999px;border:1px solid var(--border-strong);background:rgba(55,65,81,.5);color:var(--text-soft);font-size:.75rem;font-weight:600}
.icon{width:20px;height:20px;flex-shrink:0}
.icon-sm{width:16px;height:16px}
.icon-lg{width:40px;height:40px}
.icon-xl{width:64px;height:64px}
.muted{color:var(--text-muted)}
.faint{color:var(--text-faint)}
.lock-overlay{position:absolute;inset:0;border-radius:var(--radius);background:rgba(31,41,55,.2);display:flex;flex-direction:column;align-items:center;justify-content:center;gap:8px;opacity:0;transition:opacity .3s;z-index:2;color:var(--text-soft);font-size:.875rem}
.locked:hover .lock-overlay{opacity:1}
.gauge{display:flex;flex-direction:column;align-items:center;gap:12px;text-align:center}
.gauge svg{width:140px;height:140px;transform:rotate(-90deg)}
.gauge-track{stroke:var(--track)}
.gauge-arc{stroke:#9ca3af;stroke-linecap:round;animation:sweep 1.2s ease-out both;animation-delay:var(--d,0s)}
.gauge-value{font-size:1.5rem;font-weight:700;margin-top:-96px;margin-bottom:60px}
.gauge-title{color:var(--text-soft);font-weight:500}
.bar{display:flex;flex-direction:column;gap:8px}
.bar-head{display:flex;justify-content:space-between;align-items:center;gap:12px}
.bar-track{width:100%;height:8px;border-radius:999px;background:var(--track);overflow:hidden}
.bar-track.tall{height:12px}
.bar-fill{height:100%;border-radius:999px;background:var(--fill);animation:grow 1s ease-out both;animation-delay:var(--d,0s)}
.bar-score{font-weight:600}
.bar-score.big{font-size:1.5rem;font-weight:700}
.chart svg{width:100%;height:auto}
.chart text{fill:var(--text-muted);font-size:11px}
.chart .grid-line{stroke:rgba(75,85,99,.4);stroke-dasharray:4 4}
.chart .series{fill:none;stroke:#d1d5db;stroke-width:3;stroke-linejoin:round}
.chart .dot{fill:#fff}
.chart .radar-grid{fill:none;stroke:rgba(75,85,99,.5)}
.chart .radar-area{fill:rgba(156,163,175,.3);stroke:#d1d5db;stroke-width:2}
.history{display:flex;flex-direction:column;gap:16px}
.history-row{display:flex;justify-content:space-between;align-items:center;gap:16px;padding:16px;border-radius:8px;background:rgba(31,41,55,.3);transition:background .3s}
.history-row:hover{background:rgba(55,65,81,.5)}
.score-dot{width:48px;height:48px;border-radius:50%;background:linear-gradient(90deg,#4b5563,#1f2937);display:flex;align-items:center;justify-content:center;font-weight:700}
.insights li{display:flex;align-items:flex-start;gap:12px;color:var(--text-soft);margin-bottom:12px;list-style:none}
.bullet{width:8px;height:8px;border-radius:50%;background:#9ca3af;margin-top:8px;flex-shrink:0}
.ring-outer{width:192px;height:192px;border-radius:50%;background:linear-gradient(90deg,#374151,#111827);display:flex;align-items:center;justify-content:center;margin:0 auto}
.ring-inner{width:160px;height:160px;border-radius:50%;background:#1f2937;display:flex;flex-direction:column;align-items:center;justify-content:center;animation:pop .8s ease-out .5s both}
.ring-score{font-size:3rem;font-weight:700}
.field{display:flex;flex-direction:column;gap:8px}
.field label{color:var(--text-soft);font-size:.875rem}
.input-wrap{position:relative}
.input-wrap .icon{position:absolute;left:12px;top:50%;transform:translateY(-50%);color:var(--text-muted)}
.input{width:100%;padding:10px 12px 10px 40px;border-radius:8px;border:1px solid var(--border-strong);background:rgba(31,41,55,.5);color:var(--text);font:inherit}
.input::placeholder{color:var(--text-muted)}
.dropzone{border:2px dashed var(--border-strong);border-radius:8px;padding:48px;text-align:center;color:var(--text-soft);transition:all .3s}
.dropzone:hover{background:rgba(31,41,55,.3)}
.alert{border:1px solid #7f1d1d;background:rgba(127,29,29,.3);color:#fecaca;border-radius:8px;padding:12px 16px}
.processing{background:rgba(31,41,55,.5);border-radius:8px;padding:32px;text-align:center}
.step-icon{width:80px;height:80px;margin:0 auto 16px;border-radius:50%;background:linear-gradient(90deg,#4b5563,#1f2937);display:flex;align-items:center;justify-content:center}
.step-icon [hidden]{display:none}
.progress{height:12px;border-radius:999px;background:var(--track);overflow:hidden;margin:24px 0 16px}
.progress-fill{height:100%;background:var(--fill);transition:width .1s linear}
.dots{display:flex;justify-content:center;gap:8px;margin-top:24px}
.dot-step{width:12px;height:12px;border-radius:50%;background:#374151;transition:background .3s}
.dot-step.on{background:#9ca3af}
.modal{position:fixed;inset:0;z-index:50;display:none;align-items:center;justify-content:center;background:rgba(0,0,0,.7);padding:24px}
.modal:target{display:flex}
.modal-box{max-width:56rem;width:100%;max-height:90vh;overflow-y:auto;background:#111827;border:1px solid var(--border-strong);border-radius:var(--radius);padding:32px;display:flex;flex-direction:column;gap:24px}
.modal-box.small{max-width:28rem}
.modal-title{font-size:1.5rem;font-weight:700;background:linear-gradient(90deg,#fff,#9ca3af);-webkit-background-clip:text;background-clip:text;color:transparent}
.video-frame{aspect-ratio:16/9;background:#1f2937;border:1px solid var(--track);border-radius:8px;display:flex;flex-direction:column;align-items:center;justify-content:center;gap:8px;margin-bottom:16px}
.hero{padding:96px 24px 64px;text-align:center;max-width:56rem;margin:0 auto;position:relative;z-index:1}
.hero h1{font-size:3.5rem;line-height:1.1}
.actions{display:flex;gap:16px;justify-content:center;flex-wrap:wrap;margin-top:32px}
.rise{animation:rise .5s ease-out both;animation-delay:var(--d,0s)}
@keyframes rise{from{opacity:0;transform:translateY(20px)}}
@keyframes grow{from{width:0}}
@keyframes sweep{from{stroke-dashoffset:var(--circ)}}
@keyframes pop{from{transform:scale(0)}}
@keyframes pulse{50%{opacity:.5}}
</style>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_escapes_title_and_wraps_body() {
        let html = page("A & B", "<main>hi</main>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("<main>hi</main>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn delay_formats_tenths() {
        assert_eq!(delay(3), r#"style="--d:0.3s""#);
        assert_eq!(delay(12), r#"style="--d:1.2s""#);
    }

    #[test]
    fn post_button_targets_action() {
        let html = post_button("/logout", Some(Icon::LogOut), "Logout", "btn-ghost");
        assert!(html.contains(r#"method="post" action="/logout""#));
        assert!(html.contains("Logout"));
    }
}
