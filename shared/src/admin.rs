//! Admin save and snapshot DTOs
//!
//! A save carries, per edited collection, the full list of records left in
//! the editor plus the ids the admin removed. Records created since the last
//! load still carry temporary ids; the server answers with the real ids it
//! assigned so the editor can adopt them.

use crate::models::{
    Category, Collection, Destination, FaqItem, GalleryCategory, GalleryImage, Package,
    Page, Service, Testimonial,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Changes to one collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordChanges<R> {
    /// Every record remaining in the editor, new and existing
    #[serde(default)]
    pub upserts: Vec<R>,
    /// Ids removed from the editor since the last successful save
    #[serde(default)]
    pub deletions: Vec<String>,
}

impl<R> Default for RecordChanges<R> {
    fn default() -> Self {
        Self {
            upserts: Vec::new(),
            deletions: Vec::new(),
        }
    }
}

impl<R> RecordChanges<R> {
    pub fn new(upserts: Vec<R>, deletions: Vec<String>) -> Self {
        Self { upserts, deletions }
    }

    pub fn is_empty(&self) -> bool {
        self.upserts.is_empty() && self.deletions.is_empty()
    }
}

/// Batched save of one admin page.
///
/// A `None` collection is left untouched; only collections the page edits
/// may be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveRequest {
    /// Partial page document, deep-merged into the stored one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<RecordChanges<Destination>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<RecordChanges<Category>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<RecordChanges<Package>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<RecordChanges<Service>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<RecordChanges<Testimonial>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_items: Option<RecordChanges<FaqItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_categories: Option<RecordChanges<GalleryCategory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_images: Option<RecordChanges<GalleryImage>>,
}

impl SaveRequest {
    /// Collections this request carries changes for
    pub fn collections(&self) -> Vec<Collection> {
        let mut out = Vec::new();
        let mut push = |present: bool, c: Collection| {
            if present {
                out.push(c);
            }
        };
        push(self.destinations.is_some(), Collection::Destinations);
        push(self.categories.is_some(), Collection::Categories);
        push(self.packages.is_some(), Collection::Packages);
        push(self.services.is_some(), Collection::Services);
        push(self.testimonials.is_some(), Collection::Testimonials);
        push(self.faq_items.is_some(), Collection::FaqItems);
        push(self.gallery_categories.is_some(), Collection::GalleryCategories);
        push(self.gallery_images.is_some(), Collection::GalleryImages);
        out
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.collections().is_empty()
    }
}

/// Result of a committed save
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    /// Temporary id → server-assigned id, for every record created
    pub id_map: BTreeMap<String, String>,
    /// Documents written, content document included
    pub written: usize,
    /// Documents deleted
    pub deleted: usize,
}

impl SaveOutcome {
    /// Real id for `id`, or `id` itself when it was not remapped
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        self.id_map.get(id).map(String::as_str).unwrap_or(id)
    }
}

/// Everything an admin page needs to start editing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSnapshot {
    pub page: Page,
    /// Stored document over the page defaults
    pub content: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<Destination>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<Package>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<Testimonial>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq_items: Option<Vec<FaqItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_categories: Option<Vec<GalleryCategory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_images: Option<Vec<GalleryImage>>,
}

impl AdminSnapshot {
    pub fn new(page: Page, content: serde_json::Value) -> Self {
        Self {
            page,
            content,
            destinations: None,
            categories: None,
            packages: None,
            services: None,
            testimonials: None,
            faq_items: None,
            gallery_categories: None,
            gallery_images: None,
        }
    }
}
