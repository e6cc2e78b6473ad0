//! Collections, record traits and temporary ids

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix carried by every client-generated id of a record not yet persisted.
pub const TEMP_ID_PREFIX: &str = "new-";

/// Build a temporary id such as `new-cat-3f2a…`.
pub fn temp_id(kind: &str) -> String {
    format!("{TEMP_ID_PREFIX}{kind}-{}", uuid::Uuid::new_v4().simple())
}

/// Whether `id` was generated on the client and has never been saved.
///
/// Only the exact shape produced by [`temp_id`] counts: `new-`, a lowercase
/// kind tag, `-`, then 32 lowercase hex digits. Stored slugs such as
/// `new-zealand` stay persisted ids.
pub fn is_temp_id(id: &str) -> bool {
    let Some(rest) = id.strip_prefix(TEMP_ID_PREFIX) else {
        return false;
    };
    let Some((kind, suffix)) = rest.split_once('-') else {
        return false;
    };
    !kind.is_empty()
        && kind.bytes().all(|b| b.is_ascii_lowercase())
        && suffix.len() == 32
        && suffix.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Named groups of independent records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Content,
    Destinations,
    Packages,
    Categories,
    Services,
    Testimonials,
    FaqItems,
    GalleryImages,
    GalleryCategories,
    ContactSubmissions,
}

impl Collection {
    pub const ALL: [Collection; 10] = [
        Collection::Content,
        Collection::Destinations,
        Collection::Packages,
        Collection::Categories,
        Collection::Services,
        Collection::Testimonials,
        Collection::FaqItems,
        Collection::GalleryImages,
        Collection::GalleryCategories,
        Collection::ContactSubmissions,
    ];

    /// Storage name of the collection
    pub const fn as_str(&self) -> &'static str {
        match self {
            Collection::Content => "content",
            Collection::Destinations => "destinations",
            Collection::Packages => "packages",
            Collection::Categories => "categories",
            Collection::Services => "services",
            Collection::Testimonials => "testimonials",
            Collection::FaqItems => "faq_items",
            Collection::GalleryImages => "gallery_images",
            Collection::GalleryCategories => "gallery_categories",
            Collection::ContactSubmissions => "contact_submissions",
        }
    }

    /// Collection whose ids this collection's records point at, if any
    pub const fn parent(&self) -> Option<Collection> {
        match self {
            Collection::Packages => Some(Collection::Categories),
            Collection::GalleryImages => Some(Collection::GalleryCategories),
            _ => None,
        }
    }

    /// Whether records of another collection reference this one
    pub fn is_parent(&self) -> bool {
        Self::ALL.iter().any(|c| c.parent() == Some(*self))
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown collection '{s}'"))
    }
}

/// A record stored in one of the flat collections.
///
/// The id lives in the storage key, not in the document body; the store
/// strips it on write and injects it on read.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

/// A record the admin panel can create, edit and delete.
pub trait Editable: Record {
    /// Short tag embedded in temporary ids (`new-<kind>-…`)
    const TEMP_KIND: &'static str;

    /// A new record with placeholder values, as produced by an "add" action
    fn placeholder(id: String) -> Self;

    /// Id of the parent record, for collections with a [`Collection::parent`]
    fn parent_id(&self) -> Option<&str> {
        None
    }

    fn set_parent_id(&mut self, _parent_id: String) {}
}

/// Implements [`Record`] for a struct with a `pub id: String` field.
macro_rules! impl_record {
    ($ty:ty, $collection:expr) => {
        impl $crate::models::Record for $ty {
            const COLLECTION: $crate::models::Collection = $collection;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
}

pub(crate) use impl_record;
