//! Batched admin save
//!
//! Turns a [`SaveRequest`] into one [`WriteBatch`]:
//!
//! 1. allocate a real id for every record still carrying a temporary id
//! 2. rewrite child references (`category_id`) that point at a temporary parent id
//! 3. queue deletes for persisted ids; temporary ids were never stored and are skipped
//! 4. queue a full write of every remaining record
//! 5. queue a deep merge of the page content document
//! 6. commit everything in one transaction
//!
//! The caller gets the temp → real id map back so it can adopt the new ids.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::db::{DocumentStore, WriteBatch};
use crate::utils::validation::{MAX_ID_LEN, validate_record_text, validate_required_text};
use shared::admin::{RecordChanges, SaveOutcome, SaveRequest};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Collection, Editable, Page, is_temp_id};
use shared::util::new_document_id;

/// Save one admin page atomically
pub async fn save_page(
    store: &DocumentStore,
    page: Page,
    request: SaveRequest,
) -> AppResult<SaveOutcome> {
    let (batch, id_map) = plan_save(page, request)?;

    let summary = store.commit(batch).await.map_err(|e| {
        tracing::error!(page = %page, error = %e, "Batched save failed, nothing written");
        AppError::with_message(ErrorCode::DatabaseError, "Failed to save changes")
    })?;

    tracing::info!(
        page = %page,
        written = summary.written,
        deleted = summary.deleted,
        created = id_map.len(),
        "Page saved"
    );

    Ok(SaveOutcome {
        id_map,
        written: summary.written,
        deleted: summary.deleted,
    })
}

/// Validate `request` and build the batch without touching the store
pub fn plan_save(
    page: Page,
    request: SaveRequest,
) -> AppResult<(WriteBatch, BTreeMap<String, String>)> {
    for collection in request.collections() {
        if !page.edits(collection) {
            return Err(AppError::with_message(
                ErrorCode::SectionNotEditable,
                format!("The {page} page does not edit {collection}"),
            )
            .with_detail("collection", collection.as_str()));
        }
    }

    let mut plan = SavePlan::default();

    // Ids first, for every collection, so children can see their parents' ids
    plan.allocate(&request.destinations)?;
    plan.allocate(&request.categories)?;
    plan.allocate(&request.packages)?;
    plan.allocate(&request.services)?;
    plan.allocate(&request.testimonials)?;
    plan.allocate(&request.faq_items)?;
    plan.allocate(&request.gallery_categories)?;
    plan.allocate(&request.gallery_images)?;

    plan.stage(request.destinations)?;
    plan.stage(request.categories)?;
    plan.stage(request.packages)?;
    plan.stage(request.services)?;
    plan.stage(request.testimonials)?;
    plan.stage(request.faq_items)?;
    plan.stage(request.gallery_categories)?;
    plan.stage(request.gallery_images)?;

    if let Some(content) = request.content {
        if !content.is_object() {
            return Err(AppError::with_message(
                ErrorCode::InvalidRecord,
                "Page content must be a JSON object",
            ));
        }
        plan.batch.merge(Collection::Content, page.as_str(), content);
    }

    let id_map = plan.allocated.into_values().flatten().collect();
    Ok((plan.batch, id_map))
}

#[derive(Default)]
struct SavePlan {
    /// Per collection: temporary id → allocated id
    allocated: HashMap<Collection, BTreeMap<String, String>>,
    batch: WriteBatch,
}

impl SavePlan {
    fn allocate<R: Editable>(&mut self, changes: &Option<RecordChanges<R>>) -> AppResult<()> {
        let Some(changes) = changes else {
            return Ok(());
        };

        let mut seen = HashSet::new();
        for record in &changes.upserts {
            let id = record.id();
            validate_required_text(id, "id", MAX_ID_LEN).map_err(|e| {
                AppError::with_message(
                    ErrorCode::InvalidRecord,
                    format!("{} record has an invalid id: {}", R::COLLECTION, e.message),
                )
            })?;
            let fields = serde_json::to_value(record).map_err(|e| {
                AppError::with_message(ErrorCode::InvalidRecord, format!("Unserializable record: {e}"))
            })?;
            validate_record_text(&fields).map_err(|e| e.with_detail("id", id))?;
            if !seen.insert(id) {
                return Err(AppError::with_message(
                    ErrorCode::InvalidRecord,
                    format!("Duplicate id {id} in {}", R::COLLECTION),
                )
                .with_detail("id", id));
            }
            if is_temp_id(id) {
                self.allocated
                    .entry(R::COLLECTION)
                    .or_default()
                    .insert(id.to_string(), new_document_id());
            }
        }
        Ok(())
    }

    fn stage<R: Editable>(&mut self, changes: Option<RecordChanges<R>>) -> AppResult<()> {
        let Some(changes) = changes else {
            return Ok(());
        };

        for id in changes.deletions {
            if is_temp_id(&id) || id.trim().is_empty() {
                continue;
            }
            self.batch.delete(R::COLLECTION, id);
        }

        for mut record in changes.upserts {
            if let Some(parent_collection) = R::COLLECTION.parent()
                && let Some(parent_id) = record.parent_id().map(str::to_string)
                && is_temp_id(&parent_id)
            {
                let real = self
                    .allocated
                    .get(&parent_collection)
                    .and_then(|ids| ids.get(&parent_id))
                    .ok_or_else(|| {
                        AppError::unresolved_reference(
                            R::COLLECTION.as_str(),
                            record.id(),
                            &parent_id,
                        )
                    })?;
                record.set_parent_id(real.clone());
            }

            let real_id = self
                .allocated
                .get(&R::COLLECTION)
                .and_then(|ids| ids.get(record.id()))
                .cloned();
            if let Some(real_id) = real_id {
                record.set_id(real_id);
            }

            self.batch.set(&record).map_err(AppError::from)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::WriteOp;
    use shared::models::{Category, Package, temp_id};

    fn safari_request() -> (SaveRequest, String, String) {
        let cat_id = temp_id("cat");
        let pkg_id = temp_id("pkg");
        let request = SaveRequest {
            categories: Some(RecordChanges::new(
                vec![Category {
                    id: cat_id.clone(),
                    name: "Safaris".to_string(),
                    description: String::new(),
                }],
                vec![],
            )),
            packages: Some(RecordChanges::new(
                vec![Package {
                    id: pkg_id.clone(),
                    title: "Serengeti".to_string(),
                    category_id: cat_id.clone(),
                    ..Default::default()
                }],
                vec![],
            )),
            ..Default::default()
        };
        (request, cat_id, pkg_id)
    }

    #[test]
    fn plan_rewrites_child_reference() {
        let (request, cat_id, pkg_id) = safari_request();
        let (batch, id_map) = plan_save(Page::Packages, request).unwrap();

        let real_cat = &id_map[&cat_id];
        let real_pkg = &id_map[&pkg_id];
        assert!(!is_temp_id(real_cat));

        let package_write = batch
            .ops()
            .iter()
            .find_map(|op| match op {
                WriteOp::Set {
                    collection: Collection::Packages,
                    id,
                    data,
                } => Some((id, data)),
                _ => None,
            })
            .unwrap();
        assert_eq!(package_write.0, real_pkg);
        assert_eq!(package_write.1["category_id"], real_cat.as_str());
    }

    #[test]
    fn unknown_temp_parent_is_rejected() {
        let request = SaveRequest {
            packages: Some(RecordChanges::new(
                vec![Package {
                    id: "p1".to_string(),
                    category_id: temp_id("cat"),
                    ..Default::default()
                }],
                vec![],
            )),
            ..Default::default()
        };
        let err = plan_save(Page::Packages, request).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnresolvedReference);
    }

    #[test]
    fn temp_deletions_are_skipped() {
        let request = SaveRequest {
            categories: Some(RecordChanges::new(
                vec![],
                vec![temp_id("cat"), "c1".to_string()],
            )),
            ..Default::default()
        };
        let (batch, _) = plan_save(Page::Packages, request).unwrap();
        assert_eq!(
            batch.ops(),
            &[WriteOp::Delete {
                collection: Collection::Categories,
                id: "c1".to_string()
            }]
        );
    }

    #[test]
    fn slug_ids_with_new_prefix_are_persisted_ids() {
        let request = SaveRequest {
            categories: Some(RecordChanges::new(
                vec![Category {
                    id: "new-zealand".to_string(),
                    name: "New Zealand".to_string(),
                    description: String::new(),
                }],
                vec!["new-york".to_string()],
            )),
            ..Default::default()
        };
        let (batch, id_map) = plan_save(Page::Packages, request).unwrap();
        assert!(id_map.is_empty());
        assert_eq!(
            batch.ops()[0],
            WriteOp::Delete {
                collection: Collection::Categories,
                id: "new-york".to_string()
            }
        );
        assert!(matches!(
            &batch.ops()[1],
            WriteOp::Set { collection: Collection::Categories, id, .. } if id == "new-zealand"
        ));
    }

    #[test]
    fn collection_outside_page_is_rejected() {
        let (request, _, _) = safari_request();
        let err = plan_save(Page::Faq, request).unwrap_err();
        assert_eq!(err.code, ErrorCode::SectionNotEditable);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let cat = |id: &str| Category {
            id: id.to_string(),
            ..Default::default()
        };
        let request = SaveRequest {
            categories: Some(RecordChanges::new(vec![cat("c1"), cat("c1")], vec![])),
            ..Default::default()
        };
        let err = plan_save(Page::Packages, request).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRecord);
    }

    #[test]
    fn overlong_title_is_rejected() {
        let request = SaveRequest {
            packages: Some(RecordChanges::new(
                vec![Package {
                    id: temp_id("pkg"),
                    title: "Safari ".repeat(100),
                    ..Default::default()
                }],
                vec![],
            )),
            ..Default::default()
        };
        let err = plan_save(Page::Packages, request).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn content_must_be_object() {
        let request = SaveRequest {
            content: Some(serde_json::json!(["not", "an", "object"])),
            ..Default::default()
        };
        let err = plan_save(Page::About, request).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRecord);
    }
}
