//! Edit context handed from a host to the session

use serde::{Deserialize, Serialize};

use dynaform_schema::{FormType, FormValues};
use dynaform_store::{Record, RecordId};

/// Pointer to a stored record being revised, plus its captured values.
///
/// Hosts build one from the store when the user picks a record to edit; the
/// session consumes it on the next successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditContext {
    /// Stable id of the record under revision
    pub id: RecordId,
    /// Form type the record was captured as
    #[serde(rename = "type")]
    pub form_type: FormType,
    /// Values as stored
    pub data: FormValues,
}

impl EditContext {
    /// Create an edit context
    pub fn new(id: RecordId, form_type: FormType, data: FormValues) -> Self {
        Self { id, form_type, data }
    }

    /// Build the context for a stored record
    #[must_use]
    pub fn for_record(id: RecordId, record: &Record) -> Self {
        Self::new(id, record.form_type, record.data.clone())
    }
}
