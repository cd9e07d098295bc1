//! # Views Module
//!
//! Server-rendered HTML for every page.
//!
//! Pages are assembled as strings: a shared shell (`layout`), reusable
//! widgets (`components`), inline SVG icons (`icons`), and one module per
//! page. All dynamic text passes through `escape`.

pub mod analysis;
pub mod components;
pub mod dashboard;
pub mod home;
pub mod icons;
pub mod layout;
pub mod upload;

/// Escape text for HTML element content and quoted attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b class="x">Tom & Jerry's</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }
}
