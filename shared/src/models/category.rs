//! Package Category Model

use super::record::{Collection, Editable, impl_record};
use serde::{Deserialize, Serialize};

/// Package category (e.g. "Safaris", "Honeymoons")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl_record!(Category, Collection::Categories);

impl Editable for Category {
    const TEMP_KIND: &'static str = "cat";

    fn placeholder(id: String) -> Self {
        Self {
            id,
            name: "New Category".to_string(),
            description: String::new(),
        }
    }
}
