//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`site`] - 渲染后的 HTML 页面
//! - [`pages`] - 页面 props (JSON)
//! - [`contact`] - 联系表单提交
//! - [`admin`] - 后台快照、批量保存、留言管理

pub mod admin;
pub mod contact;
pub mod health;
pub mod pages;
pub mod site;

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::extract::rejection::JsonRejection;
use http::{HeaderName, HeaderValue};
use shared::error::AppError;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(pages::router())
        .merge(contact::router())
        .merge(admin::router())
        .merge(site::router())
        .fallback(site::handler::not_found)
}

/// Build a fully configured application with all middleware and state
///
/// Used by both the HTTP server and router tests.
pub fn build_app(state: ServerState) -> Router {
    let body_limit = state.config.max_body_bytes;
    let timeout = Duration::from_millis(state.config.request_timeout_ms);
    build_router()
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::with_status_code(
            http::StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        // CORS - admin tooling may run on another origin
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response; must sit inside SetRequestIdLayer
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - Generate unique ID for each request (outermost)
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}

/// Map a JSON extractor rejection into the unified error envelope
pub(crate) fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::invalid_request(rejection.body_text())
}
