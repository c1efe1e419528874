//! Catalog mapping form types to their field descriptors

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::model::{FieldDescriptor, FormType};
use crate::{Error, Result};

/// Registry of form schemas, keyed by form type
#[derive(Debug)]
pub struct SchemaCatalog {
    schemas: BTreeMap<FormType, Vec<FieldDescriptor>>,
}

impl SchemaCatalog {
    /// Create a new empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            schemas: BTreeMap::new(),
        }
    }

    /// Catalog pre-loaded with the built-in form types
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.schemas.insert(
            FormType::UserInfo,
            vec![
                FieldDescriptor::text("firstName", "First Name").required(),
                FieldDescriptor::text("lastName", "Last Name").required(),
                FieldDescriptor::number("age", "Age").required(),
            ],
        );
        catalog.schemas.insert(
            FormType::Address,
            vec![
                FieldDescriptor::text("street", "Street").required(),
                FieldDescriptor::text("city", "City").required(),
                FieldDescriptor::dropdown("state", "State", ["California", "Texas", "New York"])
                    .required(),
                FieldDescriptor::text("zipCode", "Zip Code").required(),
            ],
        );
        catalog.schemas.insert(
            FormType::Payment,
            vec![
                FieldDescriptor::text("cardNumber", "Card Number").required(),
                FieldDescriptor::date("expiryDate", "Expiry Date").required(),
                FieldDescriptor::password("cvv", "CVV").required(),
                FieldDescriptor::text("cardholderName", "Cardholder Name").required(),
            ],
        );
        catalog
    }

    /// Register a schema, replacing any prior descriptors for the type.
    ///
    /// Field names must be distinct within one form type.
    pub fn register(&mut self, form_type: FormType, fields: Vec<FieldDescriptor>) -> Result<()> {
        let mut seen = BTreeSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(Error::DuplicateField {
                    form_type,
                    field: field.name.clone(),
                });
            }
        }
        debug!("Registered form schema: {} ({} fields)", form_type, fields.len());
        self.schemas.insert(form_type, fields);
        Ok(())
    }

    /// Get the ordered field descriptors for a form type
    pub fn lookup(&self, form_type: FormType) -> Result<&[FieldDescriptor]> {
        self.schemas
            .get(&form_type)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownFormType(form_type.to_string()))
    }

    /// Check if a form type is registered
    #[must_use]
    pub fn contains(&self, form_type: FormType) -> bool {
        self.schemas.contains_key(&form_type)
    }

    /// Registered form types, in declaration order
    #[must_use]
    pub fn form_types(&self) -> Vec<FormType> {
        self.schemas.keys().copied().collect()
    }
}

impl Default for SchemaCatalog {
    fn default() -> Self {
        Self::new()
    }
}
