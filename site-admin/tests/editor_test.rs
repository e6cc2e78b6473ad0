//! PageEditor save behaviour against a scripted backend

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use shared::error::AppError;
use shared::models::{Category, Package, Page, default_content, is_temp_id};
use site_admin::{
    AdminSnapshot, ClientResult, PageEditor, SaveBackend, SaveOutcome, SaveRequest,
};

struct ScriptedBackend {
    fail: AtomicBool,
    requests: Mutex<Vec<SaveRequest>>,
}

impl ScriptedBackend {
    fn new(fail: bool) -> Self {
        Self {
            fail: AtomicBool::new(fail),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<SaveRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SaveBackend for ScriptedBackend {
    async fn snapshot(&self, page: Page) -> ClientResult<AdminSnapshot> {
        let mut snapshot = AdminSnapshot::new(page, default_content(page));
        snapshot.categories = Some(vec![Category {
            id: "cat-tours".to_string(),
            name: "Tours".to_string(),
            ..Default::default()
        }]);
        snapshot.packages = Some(vec![Package {
            id: "pkg-old".to_string(),
            title: "Old Favourite".to_string(),
            category_id: "cat-tours".to_string(),
            ..Default::default()
        }]);
        Ok(snapshot)
    }

    async fn save(&self, _page: Page, request: &SaveRequest) -> ClientResult<SaveOutcome> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::database("Failed to save changes").into());
        }

        let mut id_map = BTreeMap::new();
        let mut written = 0;
        let mut deleted = 0;
        if let Some(changes) = &request.categories {
            written += changes.upserts.len();
            deleted += changes.deletions.len();
            for c in changes.upserts.iter().filter(|c| is_temp_id(&c.id)) {
                id_map.insert(c.id.clone(), format!("cat-{}", id_map.len() + 1));
            }
        }
        if let Some(changes) = &request.packages {
            written += changes.upserts.len();
            deleted += changes.deletions.len();
            for p in changes.upserts.iter().filter(|p| is_temp_id(&p.id)) {
                id_map.insert(p.id.clone(), format!("pkg-{}", id_map.len() + 1));
            }
        }
        Ok(SaveOutcome {
            id_map,
            written,
            deleted,
        })
    }
}

async fn edited_packages_page(backend: &ScriptedBackend) -> (PageEditor, String, String) {
    let mut editor = PageEditor::load(backend, Page::Packages).await.unwrap();

    let categories = editor.categories.as_mut().unwrap();
    let cat_tmp = categories.append();
    categories
        .update_field(&cat_tmp, "name", Value::String("Safaris".to_string()))
        .unwrap();

    let packages = editor.packages.as_mut().unwrap();
    assert!(packages.remove("pkg-old"));
    let pkg_tmp = packages.append();
    packages
        .update_field(&pkg_tmp, "category_id", Value::String(cat_tmp.clone()))
        .unwrap();

    editor
        .set_content_field("hero.title", json!("Signature Journeys"))
        .unwrap();
    (editor, cat_tmp, pkg_tmp)
}

#[tokio::test]
async fn test_failed_save_keeps_state_and_retry_is_identical() {
    let backend = ScriptedBackend::new(true);
    let (mut editor, cat_tmp, _) = edited_packages_page(&backend).await;

    let before_content = editor.content().clone();
    let before_packages = editor.packages.clone();

    let err = editor.save(&backend).await.unwrap_err();
    assert!(err.is_retryable());
    assert!(!editor.is_saving());
    assert_eq!(editor.content(), &before_content);
    assert_eq!(editor.packages, before_packages);
    assert_eq!(
        editor.packages.as_ref().unwrap().pending_deletions(),
        ["pkg-old".to_string()]
    );
    assert!(editor.categories.as_ref().unwrap().get(&cat_tmp).is_some());

    let _ = editor.save(&backend).await;
    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn test_successful_save_adopts_real_ids() {
    let backend = ScriptedBackend::new(true);
    let (mut editor, cat_tmp, pkg_tmp) = edited_packages_page(&backend).await;
    assert!(editor.save(&backend).await.is_err());

    backend.fail.store(false, Ordering::SeqCst);
    let outcome = editor.save(&backend).await.unwrap();
    assert_eq!(outcome.deleted, 1);

    let cat_id = outcome.resolve(&cat_tmp).to_string();
    let pkg_id = outcome.resolve(&pkg_tmp).to_string();
    assert!(!is_temp_id(&cat_id));

    let categories = editor.categories.as_ref().unwrap();
    assert_eq!(categories.get(&cat_id).unwrap().name, "Safaris");
    assert!(categories.get(&cat_tmp).is_none());

    let packages = editor.packages.as_ref().unwrap();
    assert_eq!(packages.get(&pkg_id).unwrap().category_id, cat_id);
    assert!(packages.pending_deletions().is_empty());
    assert!(!packages.has_unsaved());

    // the next save carries no temporary ids and no deletions
    editor.save(&backend).await.unwrap();
    let last = backend.requests().pop().unwrap();
    let packages = last.packages.unwrap();
    assert!(packages.deletions.is_empty());
    assert!(packages.upserts.iter().all(|p| !is_temp_id(&p.id)));
}

#[tokio::test]
async fn test_temp_record_removed_before_save_is_not_deleted() {
    let backend = ScriptedBackend::new(false);
    let mut editor = PageEditor::load(&backend, Page::Packages).await.unwrap();
    let packages = editor.packages.as_mut().unwrap();
    let tmp = packages.append();
    assert!(packages.remove(&tmp));

    let outcome = editor.save(&backend).await.unwrap();
    assert_eq!(outcome.deleted, 0);
    assert!(outcome.id_map.is_empty());
    let sent = backend.requests().pop().unwrap().packages.unwrap();
    assert!(sent.deletions.is_empty());
    assert_eq!(sent.upserts.len(), 1);
}
