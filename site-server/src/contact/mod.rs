//! Contact submissions
//!
//! Visitors submit the contact form; staff list submissions and move them
//! through their status.

use crate::db::{DocumentStore, WriteBatch};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{ContactForm, ContactSubmission, SubmissionStatus};
use shared::util::now_millis;
use validator::Validate;

/// Validate the form and append one submission with status `new`.
///
/// Nothing is written when validation fails. A store failure is logged and
/// reported with a generic message; the write is not retried.
pub async fn submit(store: &DocumentStore, form: ContactForm) -> AppResult<ContactSubmission> {
    let form = form.normalized();
    form.validate()?;

    let submission = ContactSubmission::from_form(form, now_millis());
    let saved = store.insert(submission).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to store contact submission");
        AppError::internal("Failed to send message. Please try again later.")
    })?;

    tracing::info!(id = %saved.id, inquiry_type = %saved.inquiry_type, "Contact submission received");
    Ok(saved)
}

/// All submissions, newest first
pub async fn list(store: &DocumentStore) -> AppResult<Vec<ContactSubmission>> {
    let mut submissions: Vec<ContactSubmission> = store.list().await?;
    submissions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(submissions)
}

pub async fn update_status(
    store: &DocumentStore,
    id: &str,
    status: SubmissionStatus,
) -> AppResult<ContactSubmission> {
    let mut submission = store
        .get::<ContactSubmission>(id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::SubmissionNotFound,
                format!("Submission {id} not found"),
            )
        })?;

    submission.status = status;
    let mut batch = WriteBatch::new();
    batch.set(&submission)?;
    store.commit(batch).await?;

    tracing::info!(id = %id, status = %status, "Submission status updated");
    Ok(submission)
}
