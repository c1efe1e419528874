#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # dynaform-session
//!
//! The form session state machine: one user's walk from type selection
//! through field edits to submit, with per-field errors and completion
//! progress along the way.
//!
//! Sessions resolve schemas through a shared [`dynaform_schema::SchemaCatalog`]
//! and reconcile create-vs-update through an [`EditContext`]. They never touch
//! the record store; hosts own that.
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use dynaform_schema::{FormType, SchemaCatalog};
//! use dynaform_session::{Disposition, FormSession};
//!
//! let mut session = FormSession::new(Arc::new(SchemaCatalog::builtin()));
//!
//! session.select_type(FormType::UserInfo).unwrap();
//! session.change_field("firstName", "Ann");
//! session.change_field("lastName", "Lee");
//! session.change_field("age", "30");
//! assert_eq!(session.progress(), 100.0);
//!
//! let submission = session.submit().unwrap();
//! assert_eq!(submission.disposition, Disposition::Created);
//! ```

pub mod context;
pub mod progress;
pub mod session;

pub use context::EditContext;
pub use progress::completion_progress;
pub use session::{Disposition, FormSession, SessionSnapshot, SessionState, Submission};

use dynaform_validation::ValidationReport;
use thiserror::Error;

/// Errors a form session can produce
#[derive(Error, Debug)]
pub enum Error {
    #[error("Schema error: {0}")]
    Schema(#[from] dynaform_schema::Error),

    #[error("Cannot submit an empty form. Please fill out the required fields.")]
    EmptySubmission,

    #[error("Please fix validation errors before submitting.")]
    ValidationFailed(ValidationReport),
}

pub type Result<T> = std::result::Result<T, Error>;
