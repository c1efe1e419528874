//! Record identity and payload

use std::fmt;

use serde::{Deserialize, Serialize};

use dynaform_schema::{FormType, FormValues};

/// Stable handle for a stored record.
///
/// Assigned by the store on append, monotonically increasing, never reused
/// within a store's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub(crate) u64);

impl RecordId {
    /// Numeric value of the id
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A submitted form: its type and the captured values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Form type the record was submitted as
    #[serde(rename = "type")]
    pub form_type: FormType,
    /// Captured values, one entry per declared field
    pub data: FormValues,
}

impl Record {
    /// Create a record
    pub fn new(form_type: FormType, data: FormValues) -> Self {
        Self { form_type, data }
    }
}
