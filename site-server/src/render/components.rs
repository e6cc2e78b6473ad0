//! Reusable page sections

use super::{CAROUSEL_INTERVAL_MS, css_url, html_escape as e};
use shared::models::{
    CallToAction, Destination, Hero, Intro, Package, PLACEHOLDER_IMAGE, Quote, SectionHeading,
    Testimonial,
};

fn image_or_placeholder(src: &str) -> &str {
    if src.trim().is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        src
    }
}

/// Hero banner; several images become a timed carousel
pub fn hero(hero: &Hero) -> String {
    let images: Vec<&str> = hero
        .images
        .iter()
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
        .collect();

    let mut slides = String::new();
    if images.len() > 1 {
        for (i, src) in images.iter().enumerate() {
            let active = if i == 0 { " is-active" } else { "" };
            slides.push_str(&format!(
                r#"<div class="hero-slide{active}" style="background-image:url('{}')"></div>"#,
                css_url(src)
            ));
        }
    } else {
        slides.push_str(&format!(
            r#"<div class="hero-slide is-active" style="background-image:url('{}')"></div>"#,
            css_url(hero.primary_image())
        ));
    }

    let carousel = if images.len() > 1 {
        format!(r#" data-carousel data-interval="{CAROUSEL_INTERVAL_MS}""#)
    } else {
        String::new()
    };

    let cta = if hero.cta_text.trim().is_empty() {
        String::new()
    } else {
        format!(
            r#"<a class="button" href="{}">{}</a>"#,
            e(&hero.cta_link),
            e(&hero.cta_text)
        )
    };

    format!(
        r#"<section class="hero"{carousel}>{slides}<div class="hero-content"><h1>{}</h1><p>{}</p>{cta}</div></section>"#,
        e(&hero.title),
        e(&hero.subtitle)
    )
}

pub fn intro(intro: &Intro) -> String {
    format!(
        r#"<section class="intro" data-reveal><h2>{}</h2><p>{}</p></section>"#,
        e(&intro.title),
        e(&intro.text)
    )
}

pub fn heading(heading: &SectionHeading) -> String {
    format!(
        r#"<header class="section-heading"><h2>{}</h2><p>{}</p></header>"#,
        e(&heading.title),
        e(&heading.subtitle)
    )
}

pub fn quote(quote: &Quote) -> String {
    format!(
        r#"<blockquote class="quote" data-reveal><p>{}</p><cite>{}</cite></blockquote>"#,
        e(&quote.text),
        e(&quote.author)
    )
}

pub fn call_to_action(cta: &CallToAction) -> String {
    format!(
        r#"<section class="cta" data-reveal><h2>{}</h2><p>{}</p><a class="button" href="{}">{}</a></section>"#,
        e(&cta.title),
        e(&cta.text),
        e(&cta.button_link),
        e(&cta.button_text)
    )
}

pub fn destination_card(d: &Destination) -> String {
    format!(
        r#"<article class="card destination-card" data-reveal><a href="/destinations/{}"><img src="{}" alt="{}" loading="lazy"><h3>{}</h3><p class="muted">{}</p></a></article>"#,
        e(&d.id),
        e(image_or_placeholder(&d.image)),
        e(&d.name),
        e(&d.name),
        e(&d.country)
    )
}

pub fn package_card(p: &Package) -> String {
    format!(
        r#"<article class="card package-card" data-reveal><a href="/packages/{}"><img src="{}" alt="{}" loading="lazy"><h3>{}</h3><p class="muted">{} &middot; {}</p><p class="price">{}</p></a></article>"#,
        e(&p.id),
        e(image_or_placeholder(&p.image)),
        e(&p.title),
        e(&p.title),
        e(&p.destination),
        e(&p.duration),
        e(&p.price)
    )
}

pub fn testimonial_card(t: &Testimonial) -> String {
    let stars = "&#9733;".repeat(t.stars() as usize);
    format!(
        r#"<figure class="testimonial" data-reveal><div class="stars" aria-label="{} out of 5">{stars}</div><blockquote>{}</blockquote><figcaption>{}<span>{}</span></figcaption></figure>"#,
        t.stars(),
        e(&t.quote),
        e(&t.name),
        e(&t.location)
    )
}

/// `<ul>` of plain strings; empty input renders nothing
pub fn list(class: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let lis: String = items.iter().map(|i| format!("<li>{}</li>", e(i))).collect();
    format!(r#"<ul class="{class}">{lis}</ul>"#)
}

/// Collapsible `<details>` item
pub fn accordion_item(summary: &str, body_html: &str) -> String {
    format!(
        r#"<details class="accordion-item"><summary>{}</summary><div class="accordion-body">{body_html}</div></details>"#,
        e(summary)
    )
}

pub fn grid(class: &str, cards: impl IntoIterator<Item = String>) -> String {
    let inner: String = cards.into_iter().collect();
    format!(r#"<div class="grid {class}">{inner}</div>"#)
}
