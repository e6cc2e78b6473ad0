//! Service Model

use super::record::{Collection, Editable, impl_record};
use serde::{Deserialize, Serialize};

/// Service offered by the agency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub image: String,
    pub features: Vec<String>,
}

impl_record!(Service, Collection::Services);

impl Editable for Service {
    const TEMP_KIND: &'static str = "svc";

    fn placeholder(id: String) -> Self {
        Self {
            id,
            title: "New Service".to_string(),
            icon: "star".to_string(),
            ..Default::default()
        }
    }
}
