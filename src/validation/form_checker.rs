//! Whole-form validation pass.

use super::field_validation::{
    check_date_value, check_time_value, validate_email, validate_phone, validate_required,
    DEFAULT_MIN_PHONE_DIGITS,
};
use super::{ValidationError, ValidationMessages, Verdict, Violation};
use crate::config::Config;
use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};

/// The rule a field is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Required,
    Email,
    Phone,
    FutureDate,
    FutureTimeOnDate,
}

/// Snapshot of one input at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub identifier: String,
    pub kind: FieldKind,
    /// Also check required-ness before the kind's own rule.
    pub required: bool,
    pub raw_value: String,
    /// Current value of the sibling date field, for `FutureTimeOnDate`.
    pub paired_date: Option<String>,
}

impl FieldSpec {
    pub fn new(
        identifier: impl Into<String>,
        kind: FieldKind,
        raw_value: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            required: kind == FieldKind::Required,
            raw_value: raw_value.into(),
            paired_date: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_paired_date(mut self, date_value: impl Into<String>) -> Self {
        self.paired_date = Some(date_value.into());
        self
    }
}

/// Runs validation passes with a fixed set of messages and limits.
#[derive(Debug, Clone)]
pub struct FormChecker {
    messages: ValidationMessages,
    min_phone_digits: usize,
}

impl Default for FormChecker {
    fn default() -> Self {
        Self::new(ValidationMessages::default(), DEFAULT_MIN_PHONE_DIGITS)
    }
}

impl FormChecker {
    pub fn new(messages: ValidationMessages, min_phone_digits: usize) -> Self {
        Self { messages, min_phone_digits }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.messages.clone(), config.validation.min_phone_digits)
    }

    pub fn messages(&self) -> &ValidationMessages {
        &self.messages
    }

    /// Build the error reported for `field` failing with `violation`.
    pub fn error(&self, field: &str, violation: Violation) -> ValidationError {
        ValidationError {
            field: field.to_string(),
            violation,
            message: self.messages.message_for(violation).to_string(),
        }
    }

    /// Check one field; required-ness first, then the kind's rule.
    pub fn check_field(&self, field: &FieldSpec, now: NaiveDateTime) -> Option<ValidationError> {
        if field.required && !validate_required(&field.raw_value) {
            return Some(self.error(&field.identifier, Violation::Required));
        }

        let value = field.raw_value.as_str();
        let outcome = match field.kind {
            FieldKind::Required => Ok(()),
            FieldKind::Email => ok_or(validate_email(value), Violation::InvalidEmail),
            FieldKind::Phone => {
                ok_or(validate_phone(value, self.min_phone_digits), Violation::InvalidPhone)
            }
            FieldKind::FutureDate => check_date_value(value, now).map(|_| ()),
            FieldKind::FutureTimeOnDate => {
                check_time_value(value, field.paired_date.as_deref(), now)
            }
        };

        outcome.err().map(|violation| self.error(&field.identifier, violation))
    }

    /// Validate every field in declaration order.
    pub fn validate(&self, fields: &[FieldSpec], now: NaiveDateTime) -> Verdict {
        let errors: Vec<ValidationError> =
            fields.iter().filter_map(|field| self.check_field(field, now)).collect();
        debug!("Validated {} fields, {} failing", fields.len(), errors.len());
        Verdict::from_errors(errors)
    }
}

fn ok_or(passed: bool, violation: Violation) -> Result<(), Violation> {
    if passed { Ok(()) } else { Err(violation) }
}

/// Validate a form with the default messages and limits.
pub fn validate_form(fields: &[FieldSpec], now: NaiveDateTime) -> Verdict {
    FormChecker::default().validate(fields, now)
}
