//! Dotted key paths into the page content tree
//!
//! `"hero.title"` addresses an object property; numeric segments address
//! array elements (`"values.0.title"`).

use serde_json::{Map, Value};
use shared::error::{AppError, ErrorCode};

fn bad_path(path: &str, message: impl Into<String>) -> AppError {
    AppError::with_message(ErrorCode::InvalidField, message).with_detail("path", path)
}

fn segments(path: &str) -> Result<Vec<&str>, AppError> {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Err(bad_path(path, "Empty path segment"));
    }
    Ok(parts)
}

/// Replace the value at `path`, creating missing intermediate objects
pub fn set_path(root: &mut Value, path: &str, value: Value) -> Result<(), AppError> {
    let parts = segments(path)?;
    let (last, parents) = parts
        .split_last()
        .ok_or_else(|| bad_path(path, "Empty path"))?;

    let mut node = root;
    for part in parents {
        node = step_mut(node, part, path)?;
    }
    if node.is_null() {
        *node = Value::Object(Map::new());
    }

    match node {
        Value::Object(map) => {
            map.insert(last.to_string(), value);
            Ok(())
        }
        Value::Array(items) => {
            let slot = index(last, items.len(), path)?;
            items[slot] = value;
            Ok(())
        }
        _ => Err(bad_path(path, "Path does not lead to an object")),
    }
}

/// Array at `path`; a missing property becomes an empty array
pub fn array_mut<'a>(root: &'a mut Value, path: &str) -> Result<&'a mut Vec<Value>, AppError> {
    let parts = segments(path)?;
    let mut node = root;
    for part in &parts {
        node = step_mut(node, part, path)?;
    }
    if node.is_null() {
        *node = Value::Array(Vec::new());
    }
    node.as_array_mut()
        .ok_or_else(|| bad_path(path, "Path is not a list"))
}

/// Descend one segment, creating a missing object property on the way
fn step_mut<'a>(node: &'a mut Value, part: &str, path: &str) -> Result<&'a mut Value, AppError> {
    if node.is_null() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => Ok(map.entry(part.to_string()).or_insert(Value::Null)),
        Value::Array(items) => {
            let slot = index(part, items.len(), path)?;
            Ok(&mut items[slot])
        }
        _ => Err(bad_path(path, format!("Cannot descend into {part}"))),
    }
}

fn index(part: &str, len: usize, path: &str) -> Result<usize, AppError> {
    match part.parse::<usize>() {
        Ok(i) if i < len => Ok(i),
        _ => Err(bad_path(path, format!("No list element {part}"))),
    }
}
