//! Editor → in-process site server → editor

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request};
use http_body_util::BodyExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use shared::error::ApiResponse;
use shared::models::{Page, is_temp_id, temp_id};
use site_admin::{
    AdminSnapshot, ClientError, ClientResult, PageEditor, SaveBackend, SaveOutcome, SaveRequest,
};
use site_server::api::build_app;
use site_server::{Config, ServerState};
use tower::ServiceExt;

/// Calls the router directly with `oneshot`, no sockets
struct OneshotBackend {
    router: Router,
}

impl OneshotBackend {
    async fn new() -> Self {
        let state = ServerState::initialize(&Config::for_tests()).await.unwrap();
        Self {
            router: build_app(state),
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ClientResult<T> {
        let body = match body {
            Some(b) => Body::from(serde_json::to_vec(b)?),
            None => Body::empty(),
        };
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(body)
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let envelope: ApiResponse<T> = serde_json::from_slice(&bytes)?;
        if !envelope.is_success() {
            let message = envelope.message.clone();
            return Err(envelope
                .into_error()
                .map(ClientError::Api)
                .unwrap_or(ClientError::InvalidResponse(message)));
        }
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string()))
    }
}

#[async_trait]
impl SaveBackend for OneshotBackend {
    async fn snapshot(&self, page: Page) -> ClientResult<AdminSnapshot> {
        self.call(Method::GET, &format!("/api/admin/{page}"), None::<&()>)
            .await
    }

    async fn save(&self, page: Page, request: &SaveRequest) -> ClientResult<SaveOutcome> {
        self.call(Method::POST, &format!("/api/admin/{page}/save"), Some(request))
            .await
    }
}

#[tokio::test]
async fn test_safaris_category_and_package_saved_together() {
    let backend = OneshotBackend::new().await;
    let mut editor = PageEditor::load(&backend, Page::Packages).await.unwrap();

    let categories = editor.categories.as_mut().unwrap();
    let cat_tmp = categories.append();
    categories
        .update_field(&cat_tmp, "name", json!("Safaris"))
        .unwrap();

    let packages = editor.packages.as_mut().unwrap();
    let pkg_tmp = packages.append();
    packages
        .update_field(&pkg_tmp, "title", json!("Serengeti Migration"))
        .unwrap();
    packages
        .update_field(&pkg_tmp, "category_id", Value::String(cat_tmp.clone()))
        .unwrap();

    let outcome = editor.save(&backend).await.unwrap();
    let cat_id = outcome.resolve(&cat_tmp).to_string();
    assert!(!is_temp_id(&cat_id));

    // a fresh editor sees what the server stored
    let reloaded = PageEditor::load(&backend, Page::Packages).await.unwrap();
    let stored = &reloaded.packages.as_ref().unwrap().records()[0];
    assert_eq!(stored.category_id, cat_id);
    assert!(!stored.category_id.starts_with("new-cat-"));
    assert_eq!(
        reloaded.packages.as_ref().unwrap().records(),
        editor.packages.as_ref().unwrap().records()
    );
}

#[tokio::test]
async fn test_removed_record_is_deleted_on_server() {
    let backend = OneshotBackend::new().await;
    let mut editor = PageEditor::load(&backend, Page::Faq).await.unwrap();
    let faq = editor.faq_items.as_mut().unwrap();
    let first = faq.append();
    let second = faq.append();
    let outcome = editor.save(&backend).await.unwrap();

    let keep = outcome.resolve(&first).to_string();
    let drop = outcome.resolve(&second).to_string();
    assert!(editor.faq_items.as_mut().unwrap().remove(&drop));
    let outcome = editor.save(&backend).await.unwrap();
    assert_eq!(outcome.deleted, 1);

    let reloaded = PageEditor::load(&backend, Page::Faq).await.unwrap();
    let ids: Vec<&str> = reloaded
        .faq_items
        .as_ref()
        .unwrap()
        .records()
        .iter()
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(ids, vec![keep.as_str()]);
}

#[tokio::test]
async fn test_unresolved_parent_leaves_editor_untouched() {
    let backend = OneshotBackend::new().await;
    let mut editor = PageEditor::load(&backend, Page::Gallery).await.unwrap();
    let images = editor.gallery_images.as_mut().unwrap();
    let img = images.append();
    images
        .update_field(&img, "category_id", json!(temp_id("gcat")))
        .unwrap();
    let before = editor.gallery_images.clone();

    let err = editor.save(&backend).await.unwrap_err();
    assert_eq!(err.code(), Some(shared::error::ErrorCode::UnresolvedReference));
    assert!(!err.is_retryable());
    assert_eq!(editor.gallery_images, before);
}

#[tokio::test]
async fn test_contact_page_saves_content_only() {
    let backend = OneshotBackend::new().await;
    let mut editor = PageEditor::load(&backend, Page::Contact).await.unwrap();
    editor
        .set_content_field("office.phone", json!("+1 555 0100"))
        .unwrap();
    let outcome = editor.save(&backend).await.unwrap();
    assert_eq!(outcome.written, 1);

    let reloaded = PageEditor::load(&backend, Page::Contact).await.unwrap();
    assert_eq!(reloaded.content()["office"]["phone"], "+1 555 0100");
}
