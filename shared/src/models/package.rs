//! Package Model

use super::content::PLACEHOLDER_IMAGE;
use super::record::{Collection, Editable, impl_record};
use serde::{Deserialize, Serialize};

/// One day of a package itinerary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraryDay {
    pub title: String,
    pub activities: Vec<String>,
}

/// Travel package entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    pub id: String,
    pub title: String,
    /// Id of a record in `categories`; empty when uncategorised
    pub category_id: String,
    /// Destination name, matched loosely against `destinations`
    pub destination: String,
    pub duration: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub itinerary: Vec<ItineraryDay>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub featured: bool,
}

impl_record!(Package, Collection::Packages);

impl Editable for Package {
    const TEMP_KIND: &'static str = "pkg";

    fn placeholder(id: String) -> Self {
        Self {
            id,
            title: "New Package".to_string(),
            duration: "7 days".to_string(),
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
