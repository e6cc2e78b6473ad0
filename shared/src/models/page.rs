//! Public pages

use super::record::Collection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A public page with its own content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    About,
    Contact,
    Destinations,
    Packages,
    Faq,
    Gallery,
    Services,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::About,
        Page::Contact,
        Page::Destinations,
        Page::Packages,
        Page::Faq,
        Page::Gallery,
        Page::Services,
    ];

    /// Document id of the page in the `content` collection
    pub const fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Contact => "contact",
            Page::Destinations => "destinations",
            Page::Packages => "packages",
            Page::Faq => "faq",
            Page::Gallery => "gallery",
            Page::Services => "services",
        }
    }

    /// Public URL path
    pub const fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Contact => "/contact",
            Page::Destinations => "/destinations",
            Page::Packages => "/packages",
            Page::Faq => "/faq",
            Page::Gallery => "/gallery",
            Page::Services => "/services",
        }
    }

    /// Label in the site navigation
    pub const fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Contact => "Contact",
            Page::Destinations => "Destinations",
            Page::Packages => "Packages",
            Page::Faq => "FAQ",
            Page::Gallery => "Gallery",
            Page::Services => "Services",
        }
    }

    /// Collections the page's admin screen edits, parents before children
    pub const fn editable_collections(&self) -> &'static [Collection] {
        match self {
            Page::Home => &[
                Collection::Destinations,
                Collection::Packages,
                Collection::Testimonials,
            ],
            Page::About => &[Collection::Testimonials],
            Page::Contact => &[],
            Page::Destinations => &[Collection::Destinations],
            Page::Packages => &[Collection::Categories, Collection::Packages],
            Page::Faq => &[Collection::FaqItems],
            Page::Gallery => &[Collection::GalleryCategories, Collection::GalleryImages],
            Page::Services => &[Collection::Services],
        }
    }

    pub fn edits(&self, collection: Collection) -> bool {
        self.editable_collections().contains(&collection)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown page '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pages() {
        assert_eq!("faq".parse::<Page>(), Ok(Page::Faq));
        assert!("blog".parse::<Page>().is_err());
    }

    #[test]
    fn parents_listed_before_children() {
        for page in Page::ALL {
            let cols = page.editable_collections();
            for (i, c) in cols.iter().enumerate() {
                let Some(parent) = c.parent() else { continue };
                if let Some(p) = cols.iter().position(|x| *x == parent) {
                    assert!(p < i, "{page}: {parent} must precede {c}");
                }
            }
        }
    }

    #[test]
    fn packages_page_edits_categories() {
        assert!(Page::Packages.edits(Collection::Categories));
        assert!(!Page::Contact.edits(Collection::Packages));
    }
}
