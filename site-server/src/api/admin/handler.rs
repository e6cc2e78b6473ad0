//! Admin handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use shared::admin::{AdminSnapshot, SaveOutcome, SaveRequest};
use shared::error::{ApiResponse, AppResult};
use shared::models::{ContactSubmission, SubmissionStatusUpdate};

use crate::admin;
use crate::api::json_rejection;
use crate::api::pages::parse_page;
use crate::contact;
use crate::core::ServerState;

/// GET /api/admin/{page} - 编辑快照
pub async fn snapshot(
    State(state): State<ServerState>,
    Path(page): Path<String>,
) -> AppResult<ApiResponse<AdminSnapshot>> {
    let page = parse_page(&page)?;
    let snapshot = admin::load_snapshot(&state.store(), page).await?;
    Ok(ApiResponse::success(snapshot))
}

/// POST /api/admin/{page}/save - 批量保存 (单事务)
pub async fn save(
    State(state): State<ServerState>,
    Path(page): Path<String>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> AppResult<ApiResponse<SaveOutcome>> {
    let page = parse_page(&page)?;
    let Json(request) = payload.map_err(json_rejection)?;
    let outcome = admin::save_page(&state.store(), page, request).await?;
    Ok(ApiResponse::success_with_message("Changes saved", outcome))
}

/// GET /api/admin/submissions - 留言列表
pub async fn list_submissions(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<Vec<ContactSubmission>>> {
    Ok(ApiResponse::success(contact::list(&state.store()).await?))
}

/// PUT /api/admin/submissions/{id}/status - 更新状态
pub async fn update_submission_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<SubmissionStatusUpdate>, JsonRejection>,
) -> AppResult<ApiResponse<ContactSubmission>> {
    let Json(update) = payload.map_err(json_rejection)?;
    let submission = contact::update_status(&state.store(), &id, update.status).await?;
    Ok(ApiResponse::success(submission))
}
