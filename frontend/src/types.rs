//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Lead Types** - Contact form record and field names
//! - **Form State** - Submission lifecycle and banners
//! - **Error Types** - Store and configuration errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Lead Types
// =============================================================================

/// A prospective customer's contact request.
///
/// Serialized as one row of the `contact_submissions` table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number, free form
    pub phone: String,
    /// Free text message
    pub message: String,
}

/// Editable fields of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Message,
    ];

    /// DOM id of the input element.
    pub fn id(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }

    /// Label text (required marker included).
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Teljes Név *",
            FormField::Email => "Email Cím *",
            FormField::Phone => "Telefonszám *",
            FormField::Message => "Üzenet *",
        }
    }

    /// HTML input type; the message is rendered as a textarea.
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Name | FormField::Message => "text",
            FormField::Email => "email",
            FormField::Phone => "tel",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Az Ön neve",
            FormField::Email => "email@pelda.hu",
            FormField::Phone => "+36 XX XXX XXXX",
            FormField::Message => "Meséljen az elképzeléséről vagy kérdezzen...",
        }
    }
}

// =============================================================================
// Form State
// =============================================================================

/// Lifecycle of the contact form.
///
/// A single tag, so "submitting" and a finished banner can never be shown
/// at the same time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing in flight, no banner.
    #[default]
    Idle,
    /// Insert request in flight; the submit button is disabled.
    Submitting,
    /// Last insert was accepted.
    Succeeded,
    /// Last insert failed.
    Failed,
}

/// Feedback banner shown above the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Banner {
    pub title: &'static str,
    pub detail: &'static str,
    /// CSS class for styling
    pub class: &'static str,
}

impl SubmissionState {
    /// Banner to display for this state, if any.
    pub fn banner(&self) -> Option<Banner> {
        match self {
            SubmissionState::Succeeded => Some(Banner {
                title: "Köszönjük az üzenetét!",
                detail: "A lehető leghamarabb válaszolunk.",
                class: "banner banner-success",
            }),
            SubmissionState::Failed => Some(Banner {
                title: "Valami hiba történt.",
                detail: "Kérjük, próbálja újra vagy vegye fel velünk a kapcsolatot közvetlenül.",
                class: "banner banner-error",
            }),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }

    /// Submit button label.
    pub fn button_label(&self) -> &'static str {
        match self {
            SubmissionState::Submitting => "Küldés...",
            _ => "Üzenet Küldése",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors reported by a lead store.
///
/// The form maps every variant to the same failure banner; the detail only
/// goes to the console log.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Store endpoint or key was not provided at build time.
    #[error("Lead store is not configured: {0}")]
    NotConfigured(String),

    /// Request body could not be built.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// Request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Store answered with a non-success status.
    #[error("Store rejected the insert ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Errors while resolving the store configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Required build-time variable is missing or empty.
    #[error("Missing {0} environment variable")]
    Missing(&'static str),

    /// URL does not look like an HTTP(S) URL.
    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),
}

impl From<ConfigError> for StoreError {
    fn from(err: ConfigError) -> Self {
        StoreError::NotConfigured(err.to_string())
    }
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
