//! Setup-time form declarations.
//
// A schema is checked once when it is built. Validation passes over its
// snapshots can then assume every time field has a date field to pair with.

use super::form_checker::{FieldKind, FieldSpec};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Configuration errors in a form declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Field '{0}' is declared more than once")]
    DuplicateField(String),
    #[error("Time field '{0}' does not name a date field")]
    MissingDateField(String),
    #[error("Time field '{field}' refers to unknown date field '{date_field}'")]
    UnknownDateField { field: String, date_field: String },
    #[error("Field '{date_field}' referenced by '{field}' is not a date field")]
    NotADateField { field: String, date_field: String },
}

/// Declaration of one form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub identifier: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    /// Sibling date field for a `FutureTimeOnDate` rule.
    #[serde(default)]
    pub date_field: Option<String>,
}

impl FieldRule {
    pub fn new(identifier: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            required: kind == FieldKind::Required,
            date_field: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn paired_with(mut self, date_field: impl Into<String>) -> Self {
        self.date_field = Some(date_field.into());
        self
    }
}

/// An ordered, checked list of field declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    rules: Vec<FieldRule>,
}

impl FormSchema {
    pub fn new(rules: Vec<FieldRule>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.identifier.as_str()) {
                return Err(SchemaError::DuplicateField(rule.identifier.clone()));
            }
        }

        for rule in rules.iter().filter(|r| r.kind == FieldKind::FutureTimeOnDate) {
            let date_field = rule
                .date_field
                .as_deref()
                .ok_or_else(|| SchemaError::MissingDateField(rule.identifier.clone()))?;
            let target = rules.iter().find(|r| r.identifier == date_field).ok_or_else(|| {
                SchemaError::UnknownDateField {
                    field: rule.identifier.clone(),
                    date_field: date_field.to_string(),
                }
            })?;
            if target.kind != FieldKind::FutureDate {
                return Err(SchemaError::NotADateField {
                    field: rule.identifier.clone(),
                    date_field: date_field.to_string(),
                });
            }
        }

        Ok(Self { rules })
    }

    /// The booking form: contact details, service, and the date/time pair.
    pub fn booking() -> Self {
        Self {
            rules: vec![
                FieldRule::new("name", FieldKind::Required),
                FieldRule::new("email", FieldKind::Email).required(),
                FieldRule::new("phone", FieldKind::Phone).required(),
                FieldRule::new("address", FieldKind::Required),
                FieldRule::new("service", FieldKind::Required),
                FieldRule::new("date", FieldKind::FutureDate).required(),
                FieldRule::new("time", FieldKind::FutureTimeOnDate).required().paired_with("date"),
            ],
        }
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.identifier.as_str())
    }

    /// Snapshot the current `values` into field specs, in declaration order.
    /// Fields without a value are treated as empty.
    pub fn snapshot(&self, values: &HashMap<String, String>) -> Vec<FieldSpec> {
        let value_of = |name: &str| values.get(name).cloned().unwrap_or_default();
        self.rules
            .iter()
            .map(|rule| {
                let value = value_of(&rule.identifier);
                let mut spec = FieldSpec::new(&rule.identifier, rule.kind, value);
                spec.required = rule.required;
                if let Some(date_field) = &rule.date_field {
                    spec = spec.with_paired_date(value_of(date_field));
                }
                spec
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_booking_schema_passes_its_own_checks() {
        let booking = FormSchema::booking();
        assert_eq!(FormSchema::new(booking.rules().to_vec()), Ok(booking));
    }

    #[test]
    fn test_duplicate_fields_rejected() {
        let result = FormSchema::new(vec![
            FieldRule::new("email", FieldKind::Email),
            FieldRule::new("email", FieldKind::Required),
        ]);
        assert_eq!(result, Err(SchemaError::DuplicateField("email".to_string())));
    }

    #[test]
    fn test_time_field_needs_a_declared_date_field() {
        let missing = FormSchema::new(vec![FieldRule::new("time", FieldKind::FutureTimeOnDate)]);
        assert_eq!(missing, Err(SchemaError::MissingDateField("time".to_string())));

        let unknown = FormSchema::new(vec![
            FieldRule::new("time", FieldKind::FutureTimeOnDate).paired_with("day"),
        ]);
        assert!(matches!(unknown, Err(SchemaError::UnknownDateField { .. })));

        let wrong_kind = FormSchema::new(vec![
            FieldRule::new("name", FieldKind::Required),
            FieldRule::new("time", FieldKind::FutureTimeOnDate).paired_with("name"),
        ]);
        assert!(matches!(wrong_kind, Err(SchemaError::NotADateField { .. })));
    }

    #[test]
    fn test_snapshot_fills_values_and_pairs_dates() {
        let values = HashMap::from([
            ("name".to_string(), "Jane".to_string()),
            ("date".to_string(), "2026-10-20".to_string()),
            ("time".to_string(), "09:00".to_string()),
        ]);
        let fields = FormSchema::booking().snapshot(&values);

        let names: Vec<&str> = fields.iter().map(|f| f.identifier.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "phone", "address", "service", "date", "time"]);
        assert_eq!(fields[0].raw_value, "Jane");
        assert_eq!(fields[1].raw_value, "");
        assert!(fields[1].required);

        let time = &fields[6];
        assert_eq!(time.paired_date.as_deref(), Some("2026-10-20"));
    }
}
