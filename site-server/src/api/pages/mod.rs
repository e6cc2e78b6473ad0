//! Page props API 模块

pub(crate) mod handler;

pub(crate) use handler::parse_page;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/pages/{page}", get(handler::page_props))
        .route("/api/packages/{id}", get(handler::package_detail))
        .route("/api/destinations/{id}", get(handler::destination_detail))
}
