//! HTML page handlers
//!
//! List pages always render: missing content falls back to defaults and
//! unreadable collections render empty. Detail pages render a not-found page
//! for unknown ids and an inline error page when the store fails.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;
use shared::error::AppError;

use crate::core::ServerState;
use crate::render;

pub async fn home(State(state): State<ServerState>) -> Html<String> {
    let props = state.loader().home().await;
    Html(render::home_page(&state.config.site_name, &props))
}

pub async fn about(State(state): State<ServerState>) -> Html<String> {
    let props = state.loader().about().await;
    Html(render::about_page(&state.config.site_name, &props))
}

pub async fn services(State(state): State<ServerState>) -> Html<String> {
    let props = state.loader().services().await;
    Html(render::services_page(&state.config.site_name, &props))
}

pub async fn packages(State(state): State<ServerState>) -> Html<String> {
    let props = state.loader().packages().await;
    Html(render::packages_page(&state.config.site_name, &props))
}

pub async fn destinations(State(state): State<ServerState>) -> Html<String> {
    let props = state.loader().destinations().await;
    Html(render::destinations_page(&state.config.site_name, &props))
}

pub async fn gallery(State(state): State<ServerState>) -> Html<String> {
    let props = state.loader().gallery().await;
    Html(render::gallery_page(&state.config.site_name, &props))
}

pub async fn faq(State(state): State<ServerState>) -> Html<String> {
    let props = state.loader().faq().await;
    Html(render::faq_page(&state.config.site_name, &props))
}

pub async fn contact(State(state): State<ServerState>) -> Html<String> {
    let props = state.loader().contact().await;
    Html(render::contact_page(&state.config.site_name, &props))
}

pub async fn package_detail(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Response {
    let site = &state.config.site_name;
    match state.loader().package_detail(&id).await {
        Ok(props) => Html(render::package_detail_page(site, &props)).into_response(),
        Err(e) => error_response(site, "Package", e),
    }
}

pub async fn destination_detail(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Response {
    let site = &state.config.site_name;
    match state.loader().destination_detail(&id).await {
        Ok(props) => Html(render::destination_detail_page(site, &props)).into_response(),
        Err(e) => error_response(site, "Destination", e),
    }
}

/// Router fallback
pub async fn not_found(State(state): State<ServerState>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(render::error_page(
            &state.config.site_name,
            "Page not found",
            "The page you are looking for does not exist.",
        )),
    )
        .into_response()
}

fn error_response(site: &str, resource: &str, err: AppError) -> Response {
    let status = err.http_status();
    let html = if status == StatusCode::NOT_FOUND {
        render::error_page(
            site,
            &format!("{resource} not found"),
            &format!("We couldn't find that {}.", resource.to_lowercase()),
        )
    } else {
        render::error_page(
            site,
            &format!("Error loading {}", resource.to_lowercase()),
            "Something went wrong while loading this page. Please try again later.",
        )
    };
    (status, Html(html)).into_response()
}
