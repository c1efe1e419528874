//! # dynaform-schema
//!
//! Form model and schema catalog for the dynamic form engine.
//!
//! A form type names an ordered list of field descriptors; the catalog is the
//! single lookup point the session and hosts resolve schemas through.

pub mod catalog;
pub mod model;

pub use catalog::SchemaCatalog;
pub use model::{FieldDescriptor, FieldKind, FormType, FormValues};

use thiserror::Error;

/// Errors that can occur when working with form schemas
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown form type: {0}")]
    UnknownFormType(String),

    #[error("Duplicate field name '{field}' in form type '{form_type}'")]
    DuplicateField { form_type: FormType, field: String },
}

pub type Result<T> = std::result::Result<T, Error>;
