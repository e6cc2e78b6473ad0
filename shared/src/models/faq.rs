//! FAQ Model

use super::record::{Collection, Editable, impl_record};
use serde::{Deserialize, Serialize};

/// Group label used for items without a category
pub const DEFAULT_FAQ_CATEGORY: &str = "General";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    /// Free-text group label
    pub category: String,
}

impl_record!(FaqItem, Collection::FaqItems);

impl Editable for FaqItem {
    const TEMP_KIND: &'static str = "faq";

    fn placeholder(id: String) -> Self {
        Self {
            id,
            question: "New question?".to_string(),
            answer: String::new(),
            category: DEFAULT_FAQ_CATEGORY.to_string(),
        }
    }
}

impl FaqItem {
    pub fn group(&self) -> &str {
        match self.category.trim() {
            "" => DEFAULT_FAQ_CATEGORY,
            c => c,
        }
    }
}
