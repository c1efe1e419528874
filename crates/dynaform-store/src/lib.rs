//! # dynaform-store
//!
//! In-memory store for submitted form records.
//!
//! Records get a monotonically increasing id on append. Ids stay stable
//! across removals and are never reused, so hosts can hold onto them across
//! edits and deletes without the shifting-index problem.

pub mod record;
pub mod store;

pub use record::{Record, RecordId};
pub use store::RecordStore;

use thiserror::Error;

/// Errors that can occur when working with the record store
#[derive(Error, Debug)]
pub enum Error {
    #[error("Record not found: {0}")]
    UnknownRecord(RecordId),
}

pub type Result<T> = std::result::Result<T, Error>;
