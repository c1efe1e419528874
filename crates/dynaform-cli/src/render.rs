//! Plain-text rendering of stored records

use dynaform_schema::SchemaCatalog;
use dynaform_store::{Record, RecordId, RecordStore};

/// Derive a display label from a camelCase field name: `zipCode` -> `Zip Code`
#[must_use]
pub fn field_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}

/// Render one record under its form heading, fields in schema order
#[must_use]
pub fn render_record(id: RecordId, record: &Record, catalog: &SchemaCatalog) -> String {
    let mut out = format!("{id} {}\n", record.form_type.heading());
    let mut remaining = record.data.clone();
    if let Ok(fields) = catalog.lookup(record.form_type) {
        for field in fields {
            if let Some(value) = remaining.remove(&field.name) {
                out.push_str(&format!("  {}: {}\n", field.label, value));
            }
        }
    }
    // Keys the schema no longer declares still render, labeled best-effort
    for (name, value) in &remaining {
        out.push_str(&format!("  {}: {}\n", field_label(name), value));
    }
    out
}

/// Render every stored record in append order
#[must_use]
pub fn render_table(store: &RecordStore, catalog: &SchemaCatalog) -> String {
    if store.is_empty() {
        return "(no records)\n".to_string();
    }
    let blocks: Vec<String> = store
        .records()
        .map(|(id, record)| render_record(id, record, catalog))
        .collect();
    blocks.join("\n")
}
