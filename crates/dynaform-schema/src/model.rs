//! Form model definitions

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Raw field values keyed by field name
pub type FormValues = BTreeMap<String, String>;

/// The closed set of form types the engine ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormType {
    UserInfo,
    Address,
    Payment,
}

impl FormType {
    /// Wire identifier, e.g. `userInfo`
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserInfo => "userInfo",
            Self::Address => "address",
            Self::Payment => "payment",
        }
    }

    /// Heading used when presenting submitted records
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::UserInfo => "User Information",
            Self::Address => "Address Information",
            Self::Payment => "Payment Information",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "userInfo" => Ok(Self::UserInfo),
            "address" => Ok(Self::Address),
            "payment" => Ok(Self::Payment),
            other => Err(Error::UnknownFormType(other.to_string())),
        }
    }
}

/// Input widget a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Password,
    Date,
    Dropdown,
}

impl FieldKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Password => "password",
            Self::Date => "date",
            Self::Dropdown => "dropdown",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definition of a single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Submission key, camelCase by convention
    pub name: String,
    /// Widget the field renders as
    pub kind: FieldKind,
    /// Human-readable label
    pub label: String,
    /// Whether the field must be filled and counts toward progress
    pub required: bool,
    /// Choices for dropdown fields, empty for everything else
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    /// Create an optional field of the given kind
    pub fn new(name: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            label: label.into(),
            required: false,
            options: Vec::new(),
        }
    }

    /// Shorthand for a text field
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text, label)
    }

    /// Shorthand for a number field
    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number, label)
    }

    /// Shorthand for a password field
    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Password, label)
    }

    /// Shorthand for a date field
    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Date, label)
    }

    /// Shorthand for a dropdown field with its choices
    pub fn dropdown(
        name: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut field = Self::new(name, FieldKind::Dropdown, label);
        field.options = options.into_iter().map(Into::into).collect();
        field
    }

    /// Mark the field as required
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
