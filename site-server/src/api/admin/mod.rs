//! Admin API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/admin/submissions | GET | 留言列表 (新到旧) |
//! | /api/admin/submissions/{id}/status | PUT | 更新留言状态 |
//! | /api/admin/{page} | GET | 页面编辑快照 |
//! | /api/admin/{page}/save | POST | 批量保存 |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/submissions", get(handler::list_submissions))
        .route("/submissions/{id}/status", put(handler::update_submission_status))
        .route("/{page}", get(handler::snapshot))
        .route("/{page}/save", post(handler::save))
}
