//! Destination Model

use super::content::PLACEHOLDER_IMAGE;
use super::record::{Collection, Editable, impl_record};
use serde::{Deserialize, Serialize};

/// Destination entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image: String,
    pub highlights: Vec<String>,
    /// Free text, e.g. "November to March"
    pub best_time: String,
    pub featured: bool,
}

impl_record!(Destination, Collection::Destinations);

impl Editable for Destination {
    const TEMP_KIND: &'static str = "dest";

    fn placeholder(id: String) -> Self {
        Self {
            id,
            name: "New Destination".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            ..Default::default()
        }
    }
}

impl Destination {
    /// Case-insensitive match against a package's free-text destination
    pub fn matches_name(&self, name: &str) -> bool {
        let name = name.trim();
        !name.is_empty() && self.name.trim().eq_ignore_ascii_case(name)
    }
}
