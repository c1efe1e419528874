//! Per-form validation report

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use dynaform_schema::{FieldDescriptor, FormValues};

use crate::rules::{FieldResult, validate_field};

/// Field-name-keyed validation errors for one form.
///
/// A field with no entry is valid. Recording a passing result clears any
/// stale message for that field, which is what keeps per-keystroke
/// revalidation honest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: BTreeMap<String, String>,
}

impl ValidationReport {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one field's result into the report.
    ///
    /// Pass/fail follows `is_valid`; the message is only the payload, so a
    /// failure without one still marks the field as failed.
    pub fn record(&mut self, field: impl Into<String>, result: FieldResult) {
        let field = field.into();
        if result.is_valid {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, result.message.unwrap_or_default());
        }
    }

    /// Message for a field, if it failed
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether any field failed
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of failing fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the report is clean
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate failing fields and their messages, in field-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Drop every recorded error
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// Validate every declared field against the current values.
///
/// Fields with no stored value validate as blank.
#[must_use]
pub fn validate_form(fields: &[FieldDescriptor], values: &FormValues) -> ValidationReport {
    let mut report = ValidationReport::new();
    for field in fields {
        let value = values.get(&field.name).map_or("", String::as_str);
        report.record(field.name.as_str(), validate_field(field, value));
    }
    trace!("Validated {} fields, {} errors", fields.len(), report.len());
    report
}
