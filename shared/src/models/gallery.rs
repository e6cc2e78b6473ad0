//! Gallery Models

use super::content::PLACEHOLDER_IMAGE;
use super::record::{Collection, Editable, impl_record};
use serde::{Deserialize, Serialize};

/// Gallery filter category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryCategory {
    pub id: String,
    pub name: String,
}

impl_record!(GalleryCategory, Collection::GalleryCategories);

impl Editable for GalleryCategory {
    const TEMP_KIND: &'static str = "gcat";

    fn placeholder(id: String) -> Self {
        Self {
            id,
            name: "New Category".to_string(),
        }
    }
}

/// Gallery image entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    pub id: String,
    pub title: String,
    pub image: String,
    /// Id of a record in `gallery_categories`; empty when unfiled
    pub category_id: String,
    pub description: String,
}

impl_record!(GalleryImage, Collection::GalleryImages);

impl Editable for GalleryImage {
    const TEMP_KIND: &'static str = "img";

    fn placeholder(id: String) -> Self {
        Self {
            id,
            title: "New Image".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            ..Default::default()
        }
    }

    fn parent_id(&self) -> Option<&str> {
        Some(self.category_id.as_str()).filter(|id| !id.is_empty())
    }

    fn set_parent_id(&mut self, parent_id: String) {
        self.category_id = parent_id;
    }
}
