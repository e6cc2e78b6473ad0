/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a server-side document id.
///
/// 32 lowercase hex chars (UUID v4 without hyphens); never starts with the
/// temporary-id prefix, so a persisted id is always distinguishable from an
/// unsaved one.
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::is_temp_id;

    #[test]
    fn document_ids_are_unique_and_not_temporary() {
        let a = new_document_id();
        let b = new_document_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(!is_temp_id(&a));
    }

    #[test]
    fn now_millis_is_after_2024() {
        assert!(now_millis() > 1_704_067_200_000);
    }
}
