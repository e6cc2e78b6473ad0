//! Testimonial Model

use super::record::{Collection, Editable, impl_record};
use serde::{Deserialize, Serialize};

/// Highest star rating a testimonial can carry
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub location: String,
    pub quote: String,
    pub image: String,
    /// 1..=5 stars
    pub rating: u8,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            location: String::new(),
            quote: String::new(),
            image: String::new(),
            rating: MAX_RATING,
        }
    }
}

impl_record!(Testimonial, Collection::Testimonials);

impl Editable for Testimonial {
    const TEMP_KIND: &'static str = "tst";

    fn placeholder(id: String) -> Self {
        Self {
            id,
            name: "Guest Name".to_string(),
            quote: "Share the traveller's experience here.".to_string(),
            ..Default::default()
        }
    }
}

impl Testimonial {
    /// Rating clamped to the displayable range
    pub fn stars(&self) -> u8 {
        self.rating.clamp(1, MAX_RATING)
    }
}
