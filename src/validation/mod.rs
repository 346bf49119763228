//! Form validation for the booking site.
//
// Field rules live in `field_validation`, the per-form aggregation in
// `form_checker`, and setup-time form declarations in `schema`.

use serde::{Deserialize, Serialize};

mod field_validation;
mod form_checker;
mod schema;

pub use field_validation::*;
pub use form_checker::*;
pub use schema::*;

/// The reason a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    Required,
    InvalidEmail,
    InvalidPhone,
    InvalidDate,
    DateNotInFuture,
    InvalidTime,
    TimeNotInFuture,
}

/// One failing field and the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub violation: Violation,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of one validation pass over a form.
///
/// `is_valid` is always equal to `errors.is_empty()`; the fields are private so
/// the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    is_valid: bool,
    errors: Vec<ValidationError>,
}

impl Verdict {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self { is_valid: errors.is_empty(), errors }
    }

    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Errors in field declaration order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The error recorded for `field`, if it failed.
    pub fn error_for(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

/// User-facing text for every violation, plus the submit toasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationMessages {
    pub required: String,
    pub invalid_email: String,
    pub invalid_phone: String,
    pub invalid_date: String,
    pub past_date: String,
    pub invalid_time: String,
    pub past_time: String,
    pub submit_blocked: String,
    pub submit_accepted: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            required: "This field is required".to_string(),
            invalid_email: "Please enter a valid email address".to_string(),
            invalid_phone: "Please enter a valid phone number".to_string(),
            invalid_date: "Please enter a valid date".to_string(),
            past_date: "Please select a future date".to_string(),
            invalid_time: "Please enter a valid time".to_string(),
            past_time: "Please select a future time".to_string(),
            submit_blocked: "Please fix the highlighted fields before submitting".to_string(),
            submit_accepted: "Thank you! Your booking request has been received.".to_string(),
        }
    }
}

impl ValidationMessages {
    pub fn message_for(&self, violation: Violation) -> &str {
        match violation {
            Violation::Required => &self.required,
            Violation::InvalidEmail => &self.invalid_email,
            Violation::InvalidPhone => &self.invalid_phone,
            Violation::InvalidDate => &self.invalid_date,
            Violation::DateNotInFuture => &self.past_date,
            Violation::InvalidTime => &self.invalid_time,
            Violation::TimeNotInFuture => &self.past_time,
        }
    }
}
