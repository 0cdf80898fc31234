//! # Boolean Validator
//!
//! Presence and type checks only. `false` is a present value.

use schemata_core::{ErrorKind, Presence, SchemaConfigError, ValidationResult};
use serde_json::Value;

use crate::schema::{admit, transition, type_mismatch, Schema};

const TYPE_NAME: &str = "boolean";

/// Schema for boolean values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanSchema {
    presence: Presence,
}

impl BooleanSchema {
    /// A required boolean schema.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Schema for BooleanSchema {
    fn validate(&self, input: Option<&Value>) -> ValidationResult {
        match admit(self.presence, input, TYPE_NAME, ErrorKind::Required) {
            Ok(value) if value.is_boolean() => ValidationResult::success(Some(value.clone())),
            Ok(value) => type_mismatch(TYPE_NAME, value),
            Err(done) => done,
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_true_and_false_are_valid() {
        for b in [true, false] {
            let r = BooleanSchema::new().validate_value(&json!(b));
            assert!(r.is_valid(), "{b} should be valid");
            assert_eq!(r.value(), Some(&json!(b)));
        }
    }

    #[test]
    fn test_false_is_not_missing_when_required() {
        let r = BooleanSchema::new().required().validate_value(&json!(false));
        assert!(r.is_valid());
    }

    #[test]
    fn test_missing_optional() {
        let r = BooleanSchema::new().optional().validate(None);
        assert!(r.is_valid());
        assert!(r.errors().is_empty());
    }

    #[test]
    fn test_missing_required() {
        let r = BooleanSchema::new().validate(None);
        assert_eq!(r.errors()[0].kind, ErrorKind::Required);
        assert_eq!(r.errors()[0].message, "required: boolean, received: undefined");
    }

    #[test]
    fn test_wrong_type() {
        for input in [json!("true"), json!(1), json!(0), Value::Null, json!([])] {
            let r = BooleanSchema::new().validate_value(&input);
            assert_eq!(r.errors().len(), 1);
            assert_eq!(r.errors()[0].kind, ErrorKind::TypeMismatch, "input {input}");
        }
    }
}
