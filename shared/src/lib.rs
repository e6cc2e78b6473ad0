//! Shared types for the travel site
//!
//! Content models, record traits, admin save DTOs and the unified
//! error/response types used by both the server and the admin client.

pub mod admin;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use admin::{AdminSnapshot, RecordChanges, SaveOutcome, SaveRequest};
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
