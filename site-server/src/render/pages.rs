//! Full pages

use super::components::*;
use super::{css_url, html_escape as e, layout};
use crate::content::*;
use crate::content::loader::ALL_FILTER_ID;
use shared::models::{InquiryType, Page};

pub fn home_page(site: &str, props: &HomeProps) -> String {
    let c = &props.content;
    let mut body = hero(&c.hero);
    body.push_str(&intro(&c.intro));

    body.push_str(r#"<section class="featured-destinations">"#);
    body.push_str(&heading(&c.destinations));
    body.push_str(&grid("destinations", props.featured_destinations.iter().map(destination_card)));
    body.push_str("</section>");

    body.push_str(r#"<section class="featured-packages">"#);
    body.push_str(&heading(&c.packages));
    body.push_str(&grid("packages", props.featured_packages.iter().map(package_card)));
    body.push_str("</section>");

    if !props.testimonials.is_empty() {
        body.push_str(r#"<section class="testimonials" data-carousel data-interval="8000">"#);
        body.push_str(&heading(&c.testimonials));
        body.push_str(&props.testimonials.iter().map(testimonial_card).collect::<String>());
        body.push_str("</section>");
    }

    body.push_str(&quote(&c.quote));
    body.push_str(&call_to_action(&c.cta));
    layout(site, Page::Home.title(), Some(Page::Home), &body)
}

pub fn about_page(site: &str, props: &AboutProps) -> String {
    let c = &props.content;
    let mut body = hero(&c.hero);
    body.push_str(&intro(&c.intro));

    let paragraphs: String = c
        .story
        .paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", e(p)))
        .collect();
    body.push_str(&format!(
        r#"<section class="story" data-reveal><div><h2>{}</h2>{paragraphs}</div><img src="{}" alt="{}" loading="lazy"></section>"#,
        e(&c.story.title),
        e(&c.story.image),
        e(&c.story.title)
    ));

    body.push_str(r#"<section class="values">"#);
    body.push_str(&heading(&c.values_heading));
    body.push_str(&grid(
        "values",
        c.values.iter().map(|v| {
            format!(
                r#"<article class="value" data-reveal><span class="icon icon-{}"></span><h3>{}</h3><p>{}</p></article>"#,
                e(&v.icon),
                e(&v.title),
                e(&v.description)
            )
        }),
    ));
    body.push_str("</section>");

    if !props.testimonials.is_empty() {
        body.push_str(r#"<section class="testimonials">"#);
        body.push_str(&props.testimonials.iter().map(testimonial_card).collect::<String>());
        body.push_str("</section>");
    }

    body.push_str(&quote(&c.quote));
    body.push_str(&call_to_action(&c.cta));
    layout(site, &c.hero.title, Some(Page::About), &body)
}

pub fn destinations_page(site: &str, props: &DestinationsProps) -> String {
    let c = &props.content;
    let mut body = hero(&c.hero);
    body.push_str(&intro(&c.intro));
    if props.destinations.is_empty() {
        body.push_str(r#"<p class="empty">New destinations are coming soon.</p>"#);
    } else {
        body.push_str(&grid("destinations", props.destinations.iter().map(destination_card)));
    }
    body.push_str(&call_to_action(&c.cta));
    layout(site, &c.hero.title, Some(Page::Destinations), &body)
}

pub fn destination_detail_page(site: &str, props: &DestinationDetailProps) -> String {
    let d = &props.destination;
    let mut body = format!(
        r#"<section class="detail-hero" style="background-image:url('{}')"><h1>{}</h1><p>{}</p></section>"#,
        css_url(&d.image),
        e(&d.name),
        e(&d.country)
    );
    body.push_str(&format!(
        r#"<section class="detail" data-reveal><p>{}</p>"#,
        e(&d.description)
    ));
    if !d.best_time.is_empty() {
        body.push_str(&format!(
            r#"<p class="best-time"><strong>Best time to visit:</strong> {}</p>"#,
            e(&d.best_time)
        ));
    }
    body.push_str(&list("highlights", &d.highlights));
    body.push_str("</section>");

    if !props.packages.is_empty() {
        body.push_str(&format!(
            r#"<section class="related"><h2>Packages to {}</h2>"#,
            e(&d.name)
        ));
        body.push_str(&grid("packages", props.packages.iter().map(package_card)));
        body.push_str("</section>");
    }
    layout(site, &d.name, Some(Page::Destinations), &body)
}

pub fn packages_page(site: &str, props: &PackagesProps) -> String {
    let c = &props.content;
    let mut body = hero(&c.hero);
    body.push_str(&intro(&c.intro));

    for group in props.categories.iter().filter(|g| !g.packages.is_empty()) {
        body.push_str(&format!(
            r#"<section class="package-category" id="category-{}"><h2>{}</h2><p>{}</p>"#,
            e(&group.category.id),
            e(&group.category.name),
            e(&group.category.description)
        ));
        body.push_str(&grid("packages", group.packages.iter().map(package_card)));
        body.push_str("</section>");
    }
    if !props.uncategorized.is_empty() {
        body.push_str(r#"<section class="package-category"><h2>More Journeys</h2>"#);
        body.push_str(&grid("packages", props.uncategorized.iter().map(package_card)));
        body.push_str("</section>");
    }

    body.push_str(&call_to_action(&c.cta));
    layout(site, &c.hero.title, Some(Page::Packages), &body)
}

pub fn package_detail_page(site: &str, props: &PackageDetailProps) -> String {
    let p = &props.package;
    let category = props
        .category
        .as_ref()
        .map(|c| format!(r#"<p class="eyebrow">{}</p>"#, e(&c.name)))
        .unwrap_or_default();

    let mut body = format!(
        r#"<section class="detail-hero" style="background-image:url('{}')">{category}<h1>{}</h1><p>{} &middot; {}</p><p class="price">{}</p></section>"#,
        css_url(&p.image),
        e(&p.title),
        e(&p.destination),
        e(&p.duration),
        e(&p.price)
    );
    body.push_str(&format!(
        r#"<section class="detail" data-reveal><p>{}</p></section>"#,
        e(&p.description)
    ));

    if !p.itinerary.is_empty() {
        body.push_str(r#"<section class="itinerary"><h2>Itinerary</h2>"#);
        for (i, day) in p.itinerary.iter().enumerate() {
            body.push_str(&accordion_item(
                &format!("Day {}: {}", i + 1, day.title),
                &list("activities", &day.activities),
            ));
        }
        body.push_str("</section>");
    }

    body.push_str(r#"<section class="inclusions" data-reveal>"#);
    if !p.inclusions.is_empty() {
        body.push_str("<h3>Included</h3>");
        body.push_str(&list("included", &p.inclusions));
    }
    if !p.exclusions.is_empty() {
        body.push_str("<h3>Not included</h3>");
        body.push_str(&list("excluded", &p.exclusions));
    }
    body.push_str("</section>");

    if !props.related.is_empty() {
        body.push_str(r#"<section class="related"><h2>You May Also Like</h2>"#);
        body.push_str(&grid("packages", props.related.iter().map(package_card)));
        body.push_str("</section>");
    }
    layout(site, &p.title, Some(Page::Packages), &body)
}

pub fn faq_page(site: &str, props: &FaqProps) -> String {
    let c = &props.content;
    let mut body = hero(&c.hero);
    body.push_str(&intro(&c.intro));

    for group in &props.groups {
        body.push_str(&format!(
            r#"<section class="faq-group" data-reveal><h2>{}</h2>"#,
            e(&group.category)
        ));
        for item in &group.items {
            body.push_str(&accordion_item(
                &item.question,
                &format!("<p>{}</p>", e(&item.answer)),
            ));
        }
        body.push_str("</section>");
    }

    body.push_str(&call_to_action(&c.cta));
    layout(site, &c.hero.title, Some(Page::Faq), &body)
}

pub fn gallery_page(site: &str, props: &GalleryProps) -> String {
    let c = &props.content;
    let mut body = hero(&c.hero);
    body.push_str(&intro(&c.intro));

    body.push_str(r#"<nav class="gallery-filters">"#);
    for category in &props.categories {
        let active = if category.id == ALL_FILTER_ID {
            " is-active"
        } else {
            ""
        };
        body.push_str(&format!(
            r#"<button type="button" class="filter{active}" data-filter="{}">{}</button>"#,
            e(&category.id),
            e(&category.name)
        ));
    }
    body.push_str("</nav>");

    body.push_str(r#"<div class="masonry">"#);
    for image in &props.images {
        body.push_str(&format!(
            r#"<figure class="masonry-item" data-category="{}" data-reveal><img src="{}" alt="{}" loading="lazy"><figcaption>{}</figcaption></figure>"#,
            e(&image.category_id),
            e(&image.image),
            e(&image.title),
            e(&image.description)
        ));
    }
    body.push_str("</div>");
    layout(site, &c.hero.title, Some(Page::Gallery), &body)
}

pub fn services_page(site: &str, props: &ServicesProps) -> String {
    let c = &props.content;
    let mut body = hero(&c.hero);
    body.push_str(&intro(&c.intro));

    body.push_str(r#"<section class="services">"#);
    for service in &props.services {
        body.push_str(&accordion_item(
            &service.title,
            &format!(
                r#"<span class="icon icon-{}"></span><p>{}</p>{}"#,
                e(&service.icon),
                e(&service.description),
                list("features", &service.features)
            ),
        ));
    }
    body.push_str("</section>");

    body.push_str(r#"<section class="workflow">"#);
    body.push_str(&heading(&c.workflow_heading));
    body.push_str(r#"<ol class="steps">"#);
    for step in &c.workflow {
        body.push_str(&format!(
            r#"<li class="step" data-reveal><span class="step-number">{}</span><h3>{}</h3><p>{}</p></li>"#,
            step.step,
            e(&step.title),
            e(&step.description)
        ));
    }
    body.push_str("</ol></section>");

    body.push_str(&call_to_action(&c.cta));
    layout(site, &c.hero.title, Some(Page::Services), &body)
}

pub fn contact_page(site: &str, props: &ContactProps) -> String {
    let c = &props.content;
    let mut body = hero(&c.hero);

    let hours: String = c
        .office
        .hours
        .iter()
        .map(|h| format!("<li>{}</li>", e(h)))
        .collect();
    body.push_str(&format!(
        r#"<section class="office" data-reveal><address>{}</address><p><a href="tel:{}">{}</a></p><p><a href="mailto:{}">{}</a></p><ul class="hours">{hours}</ul></section>"#,
        e(&c.office.address),
        e(&c.office.phone),
        e(&c.office.phone),
        e(&c.office.email),
        e(&c.office.email)
    ));

    let options: String = c
        .form
        .inquiry_types
        .iter()
        .map(|value| {
            let label = value
                .parse::<InquiryType>()
                .map(|t| t.label().to_string())
                .unwrap_or_else(|_| value.clone());
            format!(r#"<option value="{}">{}</option>"#, e(value), e(&label))
        })
        .collect();

    body.push_str(&format!(
        r#"<section class="contact-form" data-reveal><h2>{}</h2><p>{}</p>
<form method="post" action="/api/contact" data-contact-form data-success="{}">
<label>Name<input name="name" required maxlength="100"></label>
<label>Email<input name="email" type="email" required maxlength="254"></label>
<label>Phone<input name="phone" type="tel" maxlength="40"></label>
<label>Country<input name="country" maxlength="80"></label>
<label>Inquiry type<select name="inquiry_type">{options}</select></label>
<label>Message<textarea name="message" required maxlength="5000"></textarea></label>
<button type="submit" class="button">Send Message</button>
</form></section>"#,
        e(&c.form.title),
        e(&c.form.subtitle),
        e(&c.form.success_message)
    ));
    layout(site, &c.hero.title, Some(Page::Contact), &body)
}

/// Inline message shown when a detail page cannot be loaded
pub fn error_page(site: &str, title: &str, message: &str) -> String {
    let body = format!(
        r#"<section class="error-message"><h1>{}</h1><p>{}</p><p><a class="button" href="/">Back to home</a></p></section>"#,
        e(title),
        e(message)
    );
    layout(site, title, None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{
        AboutContent, FaqContent, FaqItem, GalleryCategory, GalleryContent, GalleryImage,
    };

    #[test]
    fn about_defaults_render_headline() {
        let html = about_page(
            "Aurelia",
            &AboutProps {
                content: AboutContent::default(),
                testimonials: vec![],
            },
        );
        assert!(html.contains("<h1>About Us</h1>"));
        assert!(html.contains("/images/placeholder-hero.jpg"));
    }

    #[test]
    fn faq_uses_details_accordions() {
        let html = faq_page(
            "Aurelia",
            &FaqProps {
                content: FaqContent::default(),
                groups: vec![FaqGroup {
                    category: "General".into(),
                    items: vec![FaqItem {
                        id: "f1".into(),
                        question: "Do I need a visa?".into(),
                        answer: "It depends.".into(),
                        category: String::new(),
                    }],
                }],
            },
        );
        assert!(html.contains("<details class=\"accordion-item\"><summary>Do I need a visa?</summary>"));
    }

    #[test]
    fn gallery_has_filter_hooks() {
        let html = gallery_page(
            "Aurelia",
            &GalleryProps {
                content: GalleryContent::default(),
                categories: vec![
                    GalleryCategory {
                        id: ALL_FILTER_ID.into(),
                        name: "All".into(),
                    },
                    GalleryCategory {
                        id: "g1".into(),
                        name: "Beaches".into(),
                    },
                ],
                images: vec![GalleryImage {
                    id: "i1".into(),
                    title: "Sunset".into(),
                    image: "/img/sunset.jpg".into(),
                    category_id: "g1".into(),
                    description: String::new(),
                }],
            },
        );
        assert!(html.contains(r#"class="filter is-active" data-filter="all""#));
        assert!(html.contains(r#"data-category="g1""#));
    }
}
