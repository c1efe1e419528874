#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # dynaform-validation
//!
//! Hard-coded field rule set and validation reports for the form engine.
//!
//! Rules are keyed by field name: `age`, `zipCode`, `cardNumber`, `cvv`, and
//! `expiryDate` carry content rules, and every required field carries the
//! blank check. The validator is pure: it never mutates form state and never
//! fails, it only reports.
//!
//! ## Example Usage
//!
//! ```rust
//! use dynaform_schema::FieldDescriptor;
//! use dynaform_validation::validate_field;
//!
//! let zip = FieldDescriptor::text("zipCode", "Zip Code").required();
//!
//! assert!(validate_field(&zip, "560001").is_valid);
//! assert!(!validate_field(&zip, "12345").is_valid);
//! assert_eq!(
//!     validate_field(&zip, "").message.as_deref(),
//!     Some("zipCode is required.")
//! );
//! ```

pub mod report;
pub mod rules;

// Re-export main types
pub use report::{ValidationReport, validate_form};
pub use rules::{
    FieldResult, is_blank, validate_age, validate_exact_digits, validate_field,
    validate_future_date, validate_value,
};
