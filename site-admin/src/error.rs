//! Client error types

use shared::error::{AppError, ErrorCategory, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with an error envelope, or a local edit was rejected
    #[error("{0}")]
    Api(#[from] AppError),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("A save is already in progress")]
    SaveInProgress,
}

impl ClientError {
    /// Error code carried by a server or edit error
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Api(e) => Some(e.code),
            _ => None,
        }
    }

    /// Whether repeating the same request may succeed
    ///
    /// Input errors never will; transport and server-side failures might.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::InvalidResponse(_) => true,
            Self::Api(e) => e.code.category() == ErrorCategory::System,
            Self::Serialization(_) | Self::SaveInProgress => false,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
