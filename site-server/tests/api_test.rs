//! HTTP routes exercised through the full middleware stack

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::models::{Collection, PLACEHOLDER_HERO_IMAGE, temp_id};
use site_server::api::build_app;
use site_server::{Config, ServerState};
use tower::ServiceExt;

async fn test_app() -> (Router, ServerState) {
    let state = ServerState::initialize(&Config::for_tests()).await.unwrap();
    (build_app(state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get_html(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, String::from_utf8(body).unwrap())
}

async fn send_json(app: &Router, method: Method, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn valid_contact() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "+44 20 7946 0000",
        "country": "United Kingdom",
        "inquiry_type": "honeymoon",
        "message": "Two weeks in the Maldives, please."
    })
}

#[tokio::test]
async fn test_health_reports_database() {
    let (app, _) = test_app().await;
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (app, _) = test_app().await;
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let generated = response.headers().get("x-request-id").unwrap();
    assert_eq!(generated.len(), 36);

    let request = Request::builder()
        .uri("/api/pages/about")
        .header("x-request-id", "trace-abc")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-abc");
}

#[tokio::test]
async fn test_empty_store_serves_default_about_page() {
    let (app, _) = test_app().await;
    let (status, body) = get_json(&app, "/api/pages/about").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["content"]["hero"]["title"], "About Us");
    assert_eq!(
        body["data"]["content"]["hero"]["images"][0],
        PLACEHOLDER_HERO_IMAGE
    );
    assert_eq!(body["data"]["testimonials"], json!([]));

    let (status, html) = get_html(&app, "/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("About Us"));
    assert!(html.contains(PLACEHOLDER_HERO_IMAGE));
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let (app, _) = test_app().await;
    let (status, body) = get_json(&app, "/api/pages/blog").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1001);
}

#[tokio::test]
async fn test_unknown_package_renders_not_found_page() {
    let (app, _) = test_app().await;
    let (status, html) = get_html(&app, "/packages/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Package not found"));

    let (status, body) = get_json(&app, "/api/packages/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1003);
}

#[tokio::test]
async fn test_unrouted_path_uses_fallback() {
    let (app, _) = test_app().await;
    let (status, html) = get_html(&app, "/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));
}

#[tokio::test]
async fn test_contact_submission_is_stored() {
    let (app, state) = test_app().await;
    let (status, body) = send_json(&app, Method::POST, "/api/contact", valid_contact()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "new");
    assert_eq!(body["data"]["name"], "Ada Lovelace");
    assert!(!body["data"]["id"].as_str().unwrap().is_empty());
    assert_eq!(
        state.store().count(Collection::ContactSubmissions).await.unwrap(),
        1
    );
}

#[tokio::test]
async fn test_contact_missing_name_is_rejected() {
    let (app, state) = test_app().await;
    let mut form = valid_contact();
    form.as_object_mut().unwrap().remove("name");

    let (status, body) = send_json(&app, Method::POST, "/api/contact", form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert!(body["details"]["name"].is_array());
    assert_eq!(
        state.store().count(Collection::ContactSubmissions).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn test_malformed_json_uses_error_envelope() {
    let (app, _) = test_app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn test_admin_save_then_public_packages_page() {
    let (app, _) = test_app().await;
    let cat_tmp = temp_id("cat");
    let pkg_tmp = temp_id("pkg");
    let payload = json!({
        "content": { "hero": { "title": "Signature Journeys" } },
        "categories": {
            "upserts": [{ "id": cat_tmp, "name": "Safaris" }]
        },
        "packages": {
            "upserts": [{
                "id": pkg_tmp,
                "title": "Serengeti Migration",
                "category_id": cat_tmp,
                "price": "From $8,900"
            }]
        }
    });
    let (status, body) =
        send_json(&app, Method::POST, "/api/admin/packages/save", payload).await;
    assert_eq!(status, StatusCode::OK);
    let id_map = body["data"]["id_map"].as_object().unwrap();
    let cat_id = id_map[&cat_tmp].as_str().unwrap().to_string();
    let pkg_id = id_map[&pkg_tmp].as_str().unwrap().to_string();

    let (_, snapshot) = get_json(&app, "/api/admin/packages").await;
    assert_eq!(snapshot["data"]["content"]["hero"]["title"], "Signature Journeys");
    assert_eq!(snapshot["data"]["packages"][0]["category_id"], cat_id.as_str());

    let (status, html) = get_html(&app, &format!("/packages/{pkg_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Serengeti Migration"));
    assert!(html.contains("Safaris"));
}

#[tokio::test]
async fn test_admin_save_rejects_foreign_section() {
    let (app, state) = test_app().await;
    let payload = json!({
        "destinations": { "upserts": [{ "id": temp_id("dest"), "name": "Kyoto" }] }
    });
    let (status, body) =
        send_json(&app, Method::POST, "/api/admin/contact/save", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2004);
    assert_eq!(
        state.store().count(Collection::Destinations).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn test_admin_save_unresolved_parent() {
    let (app, _) = test_app().await;
    let payload = json!({
        "packages": {
            "upserts": [{ "id": temp_id("pkg"), "title": "Orphan", "category_id": temp_id("cat") }]
        }
    });
    let (status, body) =
        send_json(&app, Method::POST, "/api/admin/packages/save", payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 2001);
}

#[tokio::test]
async fn test_submission_status_update() {
    let (app, _) = test_app().await;
    let (_, created) = send_json(&app, Method::POST, "/api/contact", valid_contact()).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/admin/submissions/{id}/status"),
        json!({ "status": "replied" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "replied");

    let (_, list) = get_json(&app, "/api/admin/submissions").await;
    assert_eq!(list["data"][0]["status"], "replied");

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/admin/submissions/missing/status",
        json!({ "status": "read" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);
}
