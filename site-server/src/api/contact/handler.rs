//! Contact form handler

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use shared::error::{ApiResponse, AppResult};
use shared::models::{ContactForm, ContactSubmission};

use crate::api::json_rejection;
use crate::contact;
use crate::core::ServerState;

pub const SUBMITTED_MESSAGE: &str = "Thank you! Your message has been sent. We'll be in touch soon.";

/// POST /api/contact - 提交联系表单
pub async fn submit(
    State(state): State<ServerState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> AppResult<ApiResponse<ContactSubmission>> {
    let Json(form) = payload.map_err(json_rejection)?;
    let submission = contact::submit(&state.store(), form).await?;
    Ok(ApiResponse::success_with_message(SUBMITTED_MESSAGE, submission))
}
