//! Non-destructive JSON merge

use serde_json::Value;

/// Merge `patch` into `target`.
///
/// Objects merge key by key, recursively. Any other patch value (arrays,
/// scalars, null) replaces the target value wholesale. Keys present only in
/// `target` are kept.
pub fn deep_merge(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}
