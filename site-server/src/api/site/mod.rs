//! Public HTML pages
//!
//! | 路径 | 说明 |
//! |------|------|
//! | / | 首页 |
//! | /about | 关于我们 |
//! | /services | 服务 |
//! | /packages, /packages/{id} | 套餐列表 / 详情 |
//! | /destinations, /destinations/{id} | 目的地列表 / 详情 |
//! | /gallery | 图库 |
//! | /faq | 常见问题 |
//! | /contact | 联系我们 |

pub(crate) mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::home))
        .route("/about", get(handler::about))
        .route("/services", get(handler::services))
        .route("/packages", get(handler::packages))
        .route("/packages/{id}", get(handler::package_detail))
        .route("/destinations", get(handler::destinations))
        .route("/destinations/{id}", get(handler::destination_detail))
        .route("/gallery", get(handler::gallery))
        .route("/faq", get(handler::faq))
        .route("/contact", get(handler::contact))
}
