//! # Object Validator
//!
//! Composes named child schemas into a schema for whole records.
//!
//! ## Field Order
//!
//! Fields are checked in declaration order and validation stops at the
//! first invalid field. The child's errors are relocated under the field
//! name, so an error three objects deep carries a three-segment path from
//! outermost to innermost.
//!
//! ## Absence
//!
//! A missing input on a non-optional object schema is a `typeMismatch`,
//! not a `required` error. Anything other than a JSON object (`null`,
//! arrays, scalars) is also a `typeMismatch`. Keys not declared on the
//! schema are ignored and echoed unchanged.

use schemata_core::{ErrorKind, Presence, SchemaConfigError, ValidationResult};
use serde_json::Value;

use crate::schema::{admit, transition, type_mismatch, Schema};

const TYPE_NAME: &str = "object";

/// Schema for JSON objects with declared fields.
#[derive(Debug, Default)]
pub struct ObjectSchema {
    fields: Vec<(String, Box<dyn Schema>)>,
    presence: Presence,
}

impl ObjectSchema {
    /// An object schema with no fields. Accepts any JSON object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateField` if `name` is already declared.
    pub fn try_field<S>(mut self, name: impl Into<String>, schema: S) -> Result<Self, SchemaConfigError>
    where
        S: Schema + 'static,
    {
        self.insert(name.into(), schema.boxed())?;
        Ok(self)
    }

    /// Chaining form of [`try_field`](ObjectSchema::try_field).
    ///
    /// # Panics
    ///
    /// Panics if `name` is already declared.
    pub fn field<S>(self, name: impl Into<String>, schema: S) -> Self
    where
        S: Schema + 'static,
    {
        self.try_field(name, schema).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Declared field names in check order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn insert(&mut self, name: String, schema: Box<dyn Schema>) -> Result<(), SchemaConfigError> {
        if self.fields.iter().any(|(n, _)| *n == name) {
            tracing::warn!(field = %name, "rejected duplicate object field");
            return Err(SchemaConfigError::DuplicateField(name));
        }
        self.fields.push((name, schema));
        Ok(())
    }
}

impl Schema for ObjectSchema {
    fn validate(&self, input: Option<&Value>) -> ValidationResult {
        let value = match admit(self.presence, input, TYPE_NAME, ErrorKind::TypeMismatch) {
            Ok(value) => value,
            Err(done) => return done,
        };
        let Value::Object(record) = value else {
            return type_mismatch(TYPE_NAME, value);
        };

        for (name, schema) in &self.fields {
            let result = schema.validate(record.get(name));
            if !result.is_valid() {
                return result.prefixed(name);
            }
        }
        ValidationResult::success(Some(value.clone()))
    }

    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn presence(&self) -> Presence {
        self.presence
    }

    fn set_presence(&mut self, requested: Presence) -> Result<(), SchemaConfigError> {
        transition(&mut self.presence, requested, TYPE_NAME)
    }
}
