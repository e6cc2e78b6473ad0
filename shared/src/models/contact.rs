//! Contact Form and Submission Models

use super::record::{Collection, impl_record};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// Reasons a visitor can give for getting in touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryType {
    General,
    Booking,
    CustomTrip,
    Honeymoon,
    Group,
    Other,
}

impl InquiryType {
    pub const ALL: [InquiryType; 6] = [
        InquiryType::General,
        InquiryType::Booking,
        InquiryType::CustomTrip,
        InquiryType::Honeymoon,
        InquiryType::Group,
        InquiryType::Other,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Booking => "booking",
            InquiryType::CustomTrip => "custom-trip",
            InquiryType::Honeymoon => "honeymoon",
            InquiryType::Group => "group",
            InquiryType::Other => "other",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Booking => "Booking",
            InquiryType::CustomTrip => "Custom Trip",
            InquiryType::Honeymoon => "Honeymoon",
            InquiryType::Group => "Group Travel",
            InquiryType::Other => "Other",
        }
    }
}

impl FromStr for InquiryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown inquiry type '{s}'"))
    }
}

/// Processing state of a submission in the admin inbox
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

impl SubmissionStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::New => "new",
            SubmissionStatus::Read => "read",
            SubmissionStatus::Replied => "replied",
            SubmissionStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn validate_inquiry_type(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<InquiryType>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("inquiry_type").with_message("Unknown inquiry type".into()))
}

/// Contact form payload as submitted by a visitor.
///
/// Every field defaults to empty so a missing field is reported by
/// validation rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(
        email(message = "A valid email address is required"),
        length(max = 254)
    )]
    pub email: String,
    #[validate(length(max = 40))]
    pub phone: String,
    #[validate(length(max = 80))]
    pub country: String,
    #[validate(custom(function = "validate_inquiry_type"))]
    pub inquiry_type: String,
    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
}

impl ContactForm {
    /// Trim surrounding whitespace so blank input fails the required checks
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            country: self.country.trim().to_string(),
            inquiry_type: self.inquiry_type.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Stored contact submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country: String,
    pub inquiry_type: String,
    pub message: String,
    /// Unix millis
    pub created_at: i64,
    #[serde(default)]
    pub status: SubmissionStatus,
}

impl_record!(ContactSubmission, Collection::ContactSubmissions);

impl ContactSubmission {
    /// A fresh submission from a validated form
    pub fn from_form(form: ContactForm, created_at: i64) -> Self {
        Self {
            id: String::new(),
            name: form.name,
            email: form.email,
            phone: form.phone,
            country: form.country,
            inquiry_type: form.inquiry_type,
            message: form.message,
            created_at,
            status: SubmissionStatus::New,
        }
    }
}

/// Admin status change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionStatusUpdate {
    pub status: SubmissionStatus,
}
