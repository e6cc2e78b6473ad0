//! Site Admin - 后台编辑客户端
//!
//! Keeps an in-memory mirror of one admin page ([`PageEditor`]) and sends
//! the accumulated edits to the site server as one batched save.

pub mod backend;
pub mod config;
pub mod editor;
pub mod error;
pub mod http;

pub use backend::SaveBackend;
pub use config::ClientConfig;
pub use editor::{ListSection, PageEditor};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::admin::{AdminSnapshot, RecordChanges, SaveOutcome, SaveRequest};
pub use shared::models::Page;
