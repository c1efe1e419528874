//! Completion progress over required fields

use dynaform_schema::{FieldDescriptor, FormValues};
use dynaform_validation::is_blank;

/// Percentage of required fields carrying a non-blank value.
///
/// Optional fields never move the figure. A schema with no required fields
/// reports 0 rather than dividing by zero.
#[must_use]
pub fn completion_progress(fields: &[FieldDescriptor], values: &FormValues) -> f64 {
    let required: Vec<&FieldDescriptor> = fields.iter().filter(|f| f.required).collect();
    if required.is_empty() {
        return 0.0;
    }
    let filled = required
        .iter()
        .filter(|f| values.get(&f.name).is_some_and(|v| !is_blank(v)))
        .count();
    (filled as f64 / required.len() as f64) * 100.0
}
