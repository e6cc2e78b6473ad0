//! Save backend seam
//!
//! [`PageEditor`](crate::PageEditor) only needs to load a snapshot and send a
//! batched save; tests swap the network client for an in-process one.

use async_trait::async_trait;
use shared::admin::{AdminSnapshot, SaveOutcome, SaveRequest};
use shared::models::Page;

use crate::{ClientResult, HttpClient};

#[async_trait]
pub trait SaveBackend: Send + Sync {
    /// Editable state of `page`
    async fn snapshot(&self, page: Page) -> ClientResult<AdminSnapshot>;

    /// Commit `request` atomically; on error nothing was written
    async fn save(&self, page: Page, request: &SaveRequest) -> ClientResult<SaveOutcome>;
}

#[async_trait]
impl SaveBackend for HttpClient {
    async fn snapshot(&self, page: Page) -> ClientResult<AdminSnapshot> {
        HttpClient::snapshot(self, page).await
    }

    async fn save(&self, page: Page, request: &SaveRequest) -> ClientResult<SaveOutcome> {
        HttpClient::save(self, page, request).await
    }
}
