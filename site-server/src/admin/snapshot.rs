//! Admin snapshot: the editable state of one page

use crate::db::{DocumentStore, deep_merge};
use shared::admin::AdminSnapshot;
use shared::error::AppResult;
use shared::models::{Collection, Page, default_content};

/// Load the page document (over its defaults) and every collection the page edits.
///
/// Unlike the public loader, read errors are returned: an admin must never
/// start editing from silently substituted data.
pub async fn load_snapshot(store: &DocumentStore, page: Page) -> AppResult<AdminSnapshot> {
    let mut content = default_content(page);
    if let Some(stored) = store.get_raw(Collection::Content, page.as_str()).await? {
        deep_merge(&mut content, stored);
    }

    let mut snapshot = AdminSnapshot::new(page, content);
    for collection in page.editable_collections() {
        match collection {
            Collection::Destinations => snapshot.destinations = Some(store.list().await?),
            Collection::Categories => snapshot.categories = Some(store.list().await?),
            Collection::Packages => snapshot.packages = Some(store.list().await?),
            Collection::Services => snapshot.services = Some(store.list().await?),
            Collection::Testimonials => snapshot.testimonials = Some(store.list().await?),
            Collection::FaqItems => snapshot.faq_items = Some(store.list().await?),
            Collection::GalleryCategories => {
                snapshot.gallery_categories = Some(store.list().await?)
            }
            Collection::GalleryImages => snapshot.gallery_images = Some(store.list().await?),
            Collection::Content | Collection::ContactSubmissions => {}
        }
    }
    Ok(snapshot)
}
