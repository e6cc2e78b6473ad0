//! Input validation helpers
//!
//! Text length limits for admin-edited records. SQLite TEXT has no built-in
//! length enforcement.

use serde_json::Value;
use shared::error::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Document ids (server ids are 32 chars, temporary ids a little longer)
pub const MAX_ID_LEN: usize = 128;

/// Names and titles: destinations, packages, categories, services
pub const MAX_NAME_LEN: usize = 200;

/// Long-form text: descriptions, answers, quotes
pub const MAX_TEXT_LEN: usize = 20_000;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that a string is within the length limit.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} is too long ({len} chars, max {max_len})"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Check every string in a serialized record against the length limits.
///
/// Top-level `name` and `title` use [`MAX_NAME_LEN`]; any other string,
/// nested ones included, uses [`MAX_TEXT_LEN`].
pub fn validate_record_text(record: &Value) -> Result<(), AppError> {
    let Some(fields) = record.as_object() else {
        return Ok(());
    };
    for (key, value) in fields {
        match (key.as_str(), value) {
            ("name" | "title", Value::String(text)) => validate_text_len(text, key, MAX_NAME_LEN)?,
            _ => validate_nested_text(value, key)?,
        }
    }
    Ok(())
}

fn validate_nested_text(value: &Value, field: &str) -> Result<(), AppError> {
    match value {
        Value::String(text) => validate_text_len(text, field, MAX_TEXT_LEN),
        Value::Array(items) => items.iter().try_for_each(|v| validate_nested_text(v, field)),
        Value::Object(map) => map.values().try_for_each(|v| validate_nested_text(v, field)),
        _ => Ok(()),
    }
}
