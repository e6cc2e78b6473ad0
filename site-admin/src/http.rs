//! HTTP client for the site server API

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::admin::{AdminSnapshot, SaveOutcome, SaveRequest};
use shared::error::ApiResponse;
use shared::models::{ContactForm, ContactSubmission, Page, SubmissionStatus, SubmissionStatusUpdate};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the site server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Unwrap the `ApiResponse` envelope
    ///
    /// Error envelopes become [`ClientError::Api`] with the server's code and details.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(serde_json::from_str::<ApiResponse<serde_json::Value>>(&text)
                .ok()
                .and_then(ApiResponse::into_error)
                .map(ClientError::Api)
                .unwrap_or_else(|| ClientError::InvalidResponse(format!("{status}: {text}"))));
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&text)?;
        if !envelope.is_success() {
            let message = envelope.message.clone();
            return Err(envelope
                .into_error()
                .map(ClientError::Api)
                .unwrap_or(ClientError::InvalidResponse(message)));
        }
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string()))
    }

    // ========== Admin API ==========

    /// Editable state of one page
    pub async fn snapshot(&self, page: Page) -> ClientResult<AdminSnapshot> {
        self.get(&format!("/api/admin/{page}")).await
    }

    /// Batched save of one page
    pub async fn save(&self, page: Page, request: &SaveRequest) -> ClientResult<SaveOutcome> {
        self.post(&format!("/api/admin/{page}/save"), request).await
    }

    pub async fn submissions(&self) -> ClientResult<Vec<ContactSubmission>> {
        self.get("/api/admin/submissions").await
    }

    pub async fn update_submission_status(
        &self,
        id: &str,
        status: SubmissionStatus,
    ) -> ClientResult<ContactSubmission> {
        self.put(
            &format!("/api/admin/submissions/{id}/status"),
            &SubmissionStatusUpdate { status },
        )
        .await
    }

    // ========== Public API ==========

    pub async fn submit_contact(&self, form: &ContactForm) -> ClientResult<ContactSubmission> {
        self.post("/api/contact", form).await
    }
}
