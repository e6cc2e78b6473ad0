//! 页面编辑状态
//!
//! A [`PageEditor`] mirrors one admin page: the content document as a JSON
//! tree plus a [`ListSection`] for every collection the page edits. Edits
//! stay local until [`PageEditor::save`] sends them as one batched save.

pub mod content;
mod section;

pub use section::ListSection;

use serde::Serialize;
use serde_json::Value;
use shared::admin::{AdminSnapshot, SaveOutcome, SaveRequest};
use shared::error::{AppError, ErrorCode};
use shared::models::{
    Category, Destination, Editable, FaqItem, GalleryCategory, GalleryImage, Package, Page,
    Service, Testimonial,
};
use shared::util::new_document_id;

use crate::{ClientError, ClientResult, SaveBackend};

/// In-memory editing state of one admin page
#[derive(Debug, Clone)]
pub struct PageEditor {
    page: Page,
    content: Value,
    saving: bool,
    pub destinations: Option<ListSection<Destination>>,
    pub categories: Option<ListSection<Category>>,
    pub packages: Option<ListSection<Package>>,
    pub services: Option<ListSection<Service>>,
    pub testimonials: Option<ListSection<Testimonial>>,
    pub faq_items: Option<ListSection<FaqItem>>,
    pub gallery_categories: Option<ListSection<GalleryCategory>>,
    pub gallery_images: Option<ListSection<GalleryImage>>,
}

impl PageEditor {
    pub fn from_snapshot(snapshot: AdminSnapshot) -> Self {
        Self {
            page: snapshot.page,
            content: snapshot.content,
            saving: false,
            destinations: snapshot.destinations.map(ListSection::new),
            categories: snapshot.categories.map(ListSection::new),
            packages: snapshot.packages.map(ListSection::new),
            services: snapshot.services.map(ListSection::new),
            testimonials: snapshot.testimonials.map(ListSection::new),
            faq_items: snapshot.faq_items.map(ListSection::new),
            gallery_categories: snapshot.gallery_categories.map(ListSection::new),
            gallery_images: snapshot.gallery_images.map(ListSection::new),
        }
    }

    /// Fetch the page snapshot and start editing it
    pub async fn load(backend: &dyn SaveBackend, page: Page) -> ClientResult<Self> {
        let snapshot = backend.snapshot(page).await?;
        tracing::debug!(page = %page, "Loaded admin snapshot");
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    /// True while a save request is in flight
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    // ========== Content document ==========

    /// Replace one property of the content document by dotted key path
    pub fn set_content_field(&mut self, path: &str, value: Value) -> ClientResult<()> {
        content::set_path(&mut self.content, path, value)?;
        Ok(())
    }

    /// Push `item` onto the content list at `path` under a fresh client id.
    ///
    /// Used for nested lists such as core values and workflow steps; these
    /// live inside the content document, so removal needs no deletion
    /// bookkeeping.
    pub fn append_content_item<T: Serialize>(&mut self, path: &str, item: T) -> ClientResult<String> {
        let mut item = serde_json::to_value(item)?;
        let Some(fields) = item.as_object_mut() else {
            return Err(AppError::with_message(ErrorCode::InvalidField, "List items must be objects")
                .with_detail("path", path)
                .into());
        };
        let id = new_document_id();
        fields.insert("id".to_string(), Value::String(id.clone()));

        content::array_mut(&mut self.content, path)?.push(item);
        Ok(id)
    }

    /// Remove the item with `id` from the content list at `path`
    pub fn remove_content_item(&mut self, path: &str, id: &str) -> ClientResult<bool> {
        let items = content::array_mut(&mut self.content, path)?;
        let before = items.len();
        items.retain(|item| item.get("id").and_then(Value::as_str) != Some(id));
        Ok(items.len() != before)
    }

    // ========== Save ==========

    /// The batched save for the current state
    pub fn save_request(&self) -> SaveRequest {
        SaveRequest {
            content: Some(self.content.clone()),
            destinations: self.destinations.as_ref().map(ListSection::changes),
            categories: self.categories.as_ref().map(ListSection::changes),
            packages: self.packages.as_ref().map(ListSection::changes),
            services: self.services.as_ref().map(ListSection::changes),
            testimonials: self.testimonials.as_ref().map(ListSection::changes),
            faq_items: self.faq_items.as_ref().map(ListSection::changes),
            gallery_categories: self.gallery_categories.as_ref().map(ListSection::changes),
            gallery_images: self.gallery_images.as_ref().map(ListSection::changes),
        }
    }

    /// Send every edit as one batched save.
    ///
    /// On failure nothing changes locally, so calling `save` again sends the
    /// identical request. On success server ids replace temporary ids (child
    /// references included) and pending deletions are cleared.
    pub async fn save(&mut self, backend: &dyn SaveBackend) -> ClientResult<SaveOutcome> {
        if self.saving {
            return Err(ClientError::SaveInProgress);
        }

        let request = self.save_request();
        self.saving = true;
        let result = backend.save(self.page, &request).await;
        self.saving = false;

        match result {
            Ok(outcome) => {
                self.apply_outcome(&outcome);
                tracing::info!(
                    page = %self.page,
                    created = outcome.id_map.len(),
                    deleted = outcome.deleted,
                    "Page saved"
                );
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(page = %self.page, error = %e, "Save failed, local edits kept");
                Err(e)
            }
        }
    }

    fn apply_outcome(&mut self, outcome: &SaveOutcome) {
        fn apply<R: Editable>(section: &mut Option<ListSection<R>>, outcome: &SaveOutcome) {
            if let Some(section) = section {
                section.apply_outcome(outcome);
            }
        }
        apply(&mut self.destinations, outcome);
        apply(&mut self.categories, outcome);
        apply(&mut self.packages, outcome);
        apply(&mut self.services, outcome);
        apply(&mut self.testimonials, outcome);
        apply(&mut self.faq_items, outcome);
        apply(&mut self.gallery_categories, outcome);
        apply(&mut self.gallery_images, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::models::{CoreValue, default_content};

    fn about_editor() -> PageEditor {
        let mut snapshot = AdminSnapshot::new(Page::About, default_content(Page::About));
        snapshot.testimonials = Some(vec![]);
        PageEditor::from_snapshot(snapshot)
    }

    #[test]
    fn snapshot_sections_become_editable() {
        let editor = about_editor();
        assert_eq!(editor.page(), Page::About);
        assert!(editor.testimonials.is_some());
        assert!(editor.packages.is_none());
        assert!(!editor.is_saving());
    }

    #[test]
    fn content_field_edit_is_local() {
        let mut editor = about_editor();
        editor.set_content_field("hero.title", json!("Our Story")).unwrap();
        assert_eq!(editor.content()["hero"]["title"], "Our Story");
        assert_eq!(
            editor.save_request().content.unwrap()["hero"]["title"],
            "Our Story"
        );
    }

    #[test]
    fn content_field_edit_fills_absent_section() {
        let mut editor = PageEditor::from_snapshot(AdminSnapshot::new(
            Page::Contact,
            json!({ "office": null }),
        ));
        editor
            .set_content_field("office.phone", json!("+1 555 0100"))
            .unwrap();
        editor
            .set_content_field("hours.weekdays", json!("9-6"))
            .unwrap();
        assert_eq!(editor.content()["office"]["phone"], "+1 555 0100");
        assert_eq!(editor.content()["hours"]["weekdays"], "9-6");
    }

    #[test]
    fn nested_values_append_and_remove() {
        let mut editor = about_editor();
        let before = editor.content()["values"].as_array().unwrap().len();

        let id = editor
            .append_content_item(
                "values",
                CoreValue {
                    title: "Discreet".to_string(),
                    ..Default::default()
                },
            )
            .unwrap();
        let values = editor.content()["values"].as_array().unwrap();
        assert_eq!(values.len(), before + 1);
        assert_eq!(values[before]["id"], id.as_str());

        assert!(editor.remove_content_item("values", &id).unwrap());
        assert!(!editor.remove_content_item("values", &id).unwrap());
        assert_eq!(editor.content()["values"].as_array().unwrap().len(), before);
    }

    #[test]
    fn append_content_item_rejects_scalars() {
        let mut editor = about_editor();
        assert!(editor.append_content_item("values", "oops").is_err());
    }

    #[test]
    fn save_request_lists_only_edited_sections() {
        let mut editor = about_editor();
        let tmp = editor.testimonials.as_mut().unwrap().append();
        let request = editor.save_request();
        assert_eq!(request.testimonials.unwrap().upserts[0].id, tmp);
        assert!(request.packages.is_none());
    }
}
