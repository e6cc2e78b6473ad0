//! Unified error codes for the travel site
//!
//! This module defines all error codes used across site-server, site-admin and
//! the browser. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Content errors
//! - 2xxx: Admin save errors
//! - 3xxx: Contact submission errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Content ====================
    /// Unknown page name
    PageNotFound = 1001,
    /// Destination not found
    DestinationNotFound = 1002,
    /// Package not found
    PackageNotFound = 1003,
    /// Stored document could not be decoded
    ContentCorrupted = 1005,

    // ==================== 2xxx: Admin ====================
    /// A record references a temporary id that is not part of the save
    UnresolvedReference = 2001,
    /// A record in the save request is malformed
    InvalidRecord = 2002,
    /// Field update rejected (unknown key or wrong type)
    InvalidField = 2003,
    /// Section is not editable on this page
    SectionNotEditable = 2004,

    // ==================== 3xxx: Contact ====================
    /// Contact submission not found
    SubmissionNotFound = 3001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Content
            ErrorCode::PageNotFound => "Page not found",
            ErrorCode::DestinationNotFound => "Destination not found",
            ErrorCode::PackageNotFound => "Package not found",
            ErrorCode::ContentCorrupted => "Stored content could not be read",

            // Admin
            ErrorCode::UnresolvedReference => "Record references an unsaved parent",
            ErrorCode::InvalidRecord => "Record is invalid",
            ErrorCode::InvalidField => "Field cannot be updated",
            ErrorCode::SectionNotEditable => "Section is not editable on this page",

            // Contact
            ErrorCode::SubmissionNotFound => "Submission not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Content
            1001 => Ok(ErrorCode::PageNotFound),
            1002 => Ok(ErrorCode::DestinationNotFound),
            1003 => Ok(ErrorCode::PackageNotFound),
            1005 => Ok(ErrorCode::ContentCorrupted),

            // Admin
            2001 => Ok(ErrorCode::UnresolvedReference),
            2002 => Ok(ErrorCode::InvalidRecord),
            2003 => Ok(ErrorCode::InvalidField),
            2004 => Ok(ErrorCode::SectionNotEditable),

            // Contact
            3001 => Ok(ErrorCode::SubmissionNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
