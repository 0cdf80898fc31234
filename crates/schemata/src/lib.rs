//! # schemata — Composable Runtime Validators
//!
//! Build a schema out of string, number, boolean and object validators,
//! then check untyped JSON input against it. The outcome is either the
//! accepted value or a list of errors, each carrying the field path from
//! the root record to the offending value.
//!
//! ```
//! use schemata::prelude::*;
//! use serde_json::json;
//!
//! let person = object([
//!     ("name", string().min(2).boxed()),
//!     ("age", number().min(0).boxed()),
//! ]);
//!
//! assert!(person.validate_value(&json!({"name": "John", "age": 25})).is_valid());
//!
//! let r = person.validate_value(&json!({"name": "J", "age": 25}));
//! assert_eq!(r.errors()[0].path, vec!["name"]);
//! ```
//!
//! ## Validation Order
//!
//! Absence, then type, then rules in declaration order. The first failure
//! ends the pass, so every result carries at most one error. Objects check
//! fields in declaration order and stop at the first invalid one. See
//! [`schema`] for the full pipeline.
//!
//! ## Configuration
//!
//! - Builders ([`StringSchema::min`], [`Schema::optional`], ...) consume and
//!   return the schema so calls chain.
//! - Presence can be set once. A second `optional()`/`required()` is a
//!   [`SchemaConfigError`]: the `try_*` builders return it, the chaining
//!   builders panic with it.
//! - Schemas can also be declared in YAML/JSON; see [`descriptor`].
//!
//! ## Crate Policy
//!
//! - Depends only on `schemata-core` internally.
//! - Validation is pure: no logging, no mutation, no IO.
//! - All schemas are `Send + Sync`.

pub mod boolean;
pub mod descriptor;
pub mod document;
pub mod error;
pub mod number;
pub mod object;
pub mod schema;
pub mod string;

pub use boolean::BooleanSchema;
pub use descriptor::{load_schema, Fields, SchemaDescriptor};
pub use document::{load_document, yaml_str_to_json};
pub use error::LoadError;
pub use number::{BoundRule, NumberSchema};
pub use object::ObjectSchema;
pub use schema::Schema;
pub use string::{LengthRule, StringSchema};

pub use schemata_core::{
    build_error, ErrorKind, Presence, SchemaConfigError, ValidationError, ValidationErrors,
    ValidationResult,
};

/// A required string schema with no rules.
pub fn string() -> StringSchema {
    StringSchema::new()
}

/// A required number schema with no rules.
pub fn number() -> NumberSchema {
    NumberSchema::new()
}

/// A required boolean schema.
pub fn boolean() -> BooleanSchema {
    BooleanSchema::new()
}

/// An object schema from `(field name, schema)` pairs, checked in order.
///
/// # Panics
///
/// Panics if a field name repeats. Use [`try_object`] to handle that as
/// an error.
pub fn object<I, K>(props: I) -> ObjectSchema
where
    I: IntoIterator<Item = (K, Box<dyn Schema>)>,
    K: Into<String>,
{
    try_object(props).unwrap_or_else(|e| panic!("{e}"))
}

/// Fallible form of [`object`].
///
/// # Errors
///
/// Returns `DuplicateField` on the first repeated field name.
pub fn try_object<I, K>(props: I) -> Result<ObjectSchema, SchemaConfigError>
where
    I: IntoIterator<Item = (K, Box<dyn Schema>)>,
    K: Into<String>,
{
    let mut schema = ObjectSchema::new();
    for (name, child) in props {
        schema.insert(name.into(), child)?;
    }
    Ok(schema)
}

/// Everything needed to build and run schemas.
pub mod prelude {
    pub use crate::{boolean, number, object, string, try_object, Schema};
    pub use schemata_core::{ErrorKind, ValidationError, ValidationResult};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::SchemaConfigError;
    use serde_json::json;

    #[test]
    fn test_factories_produce_independent_schemas() {
        let a = string().min(3);
        let b = string();
        assert!(!a.validate_value(&json!("hi")).is_valid());
        assert!(b.validate_value(&json!("hi")).is_valid());
        assert!(b.rules().is_empty());
    }

    #[test]
    fn test_object_factory() {
        let schema = object([
            ("name", string().min(2).boxed()),
            ("age", number().min(0).boxed()),
            ("admin", boolean().optional().boxed()),
        ]);
        let r = schema.validate_value(&json!({"name": "John", "age": 25}));
        assert!(r.is_valid());
        assert_eq!(r.value(), Some(&json!({"name": "John", "age": 25})));
    }

    #[test]
    fn test_try_object_duplicate() {
        let err = try_object([("a", string().boxed()), ("a", number().boxed())]).unwrap_err();
        assert_eq!(err, SchemaConfigError::DuplicateField("a".into()));
    }

    #[test]
    fn test_empty_object_factory() {
        let schema = object(Vec::<(String, Box<dyn Schema>)>::new());
        assert!(schema.validate_value(&json!({})).is_valid());
    }
}
