//! HTML presentation
//!
//! Stateless templating of page props into markup. Client-side behaviour is
//! attached through data attributes only:
//!
//! - `data-carousel` / `data-interval` on hero banners with several images
//! - `data-reveal` on sections that animate in on scroll
//! - `data-filter` buttons and `data-category` items on the gallery
//!
//! Accordions are plain `<details>` elements. Every interpolated string is escaped.

mod components;
mod pages;

pub use components::*;
pub use pages::*;

use std::fmt::Write;

use shared::models::Page;

/// Milliseconds between hero slides
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Image path for `url('…')` inside a `style` attribute.
///
/// Entity escaping alone is not enough: the browser decodes `&#39;` before
/// the CSS parser runs. Characters that could end the CSS string or the
/// `url()` are percent-encoded first, which leaves the path pointing at the
/// same resource.
pub fn css_url(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    for c in src.chars() {
        if matches!(c, '\'' | '"' | '(' | ')' | '\\' | '<' | '>' | ';')
            || c.is_whitespace()
            || c.is_control()
        {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(out, "%{b:02X}");
            }
        } else {
            out.push(c);
        }
    }
    html_escape(&out)
}

/// Wrap `body` in the shared document shell with navigation
pub fn layout(site_name: &str, title: &str, active: Option<Page>, body: &str) -> String {
    let site = html_escape(site_name);
    let mut nav = String::new();
    for page in Page::ALL {
        let current = if Some(page) == active {
            r#" aria-current="page""#
        } else {
            ""
        };
        nav.push_str(&format!(
            r#"<li><a href="{}"{current}>{}</a></li>"#,
            page.path(),
            page.title()
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site}</title>
<link rel="stylesheet" href="/static/site.css">
</head>
<body>
<header class="site-header"><a class="brand" href="/">{site}</a><nav><ul>{nav}</ul></nav></header>
<main>
{body}
</main>
<footer class="site-footer"><p>&copy; {site}</p></footer>
<script src="/static/site.js" defer></script>
</body>
</html>
"#,
        title = html_escape(title),
    )
}
