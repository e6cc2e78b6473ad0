//! Data models
//!
//! Shared between site-server and site-admin (via the JSON API).
//! Records are stored as JSON documents keyed by `(collection, id)`;
//! page content documents live in the `content` collection keyed by page name.

pub mod category;
pub mod contact;
pub mod content;
pub mod destination;
pub mod faq;
pub mod gallery;
pub mod package;
pub mod page;
pub mod record;
pub mod service;
pub mod testimonial;

// Re-exports
pub use category::*;
pub use contact::*;
pub use content::*;
pub use destination::*;
pub use faq::*;
pub use gallery::*;
pub use package::*;
pub use page::*;
pub use record::{Collection, Editable, Record, TEMP_ID_PREFIX, is_temp_id, temp_id};
pub use service::*;
pub use testimonial::*;
