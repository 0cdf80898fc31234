//! # Number Validator
//!
//! Any JSON number is accepted; integers and floats compare as `f64`.
//! Bounds are inclusive and must be finite.

use schemata_core::{build_error, ErrorKind, Presence, SchemaConfigError, ValidationResult};
use serde_json::{Number, Value};

use crate::schema::{admit, transition, type_mismatch, Schema};

const TYPE_NAME: &str = "number";

/// A declared numeric bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundRule {
    /// Fails when the value is below the bound.
    Min(f64),
    /// Fails when the value is above the bound.
    Max(f64),
}

impl BoundRule {
    fn check(&self, number: &Number) -> Option<ValidationResult> {
        // Always Some without serde_json's arbitrary_precision feature.
        let value = number.as_f64()?;
        let (expected, violated) = match *self {
            Self::Min(n) => (format!("minimum of {n}"), value < n),
            Self::Max(n) => (format!("maximum of {n}"), value > n),
        };
        violated.then(|| {
            ValidationResult::failure(build_error(
                ErrorKind::RuleViolation,
                (expected.as_str(), number.to_string().as_str()),
                Vec::new(),
            ))
        })
    }
}

/// Schema for number values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberSchema {
    rules: Vec<BoundRule>,
    presence: Presence,
}

impl NumberSchema {
    /// A required number schema with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a value of at least `n`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBound` if `n` is NaN or infinite.
    pub fn try_min(self, n: impl Into<f64>) -> Result<Self, SchemaConfigError> {
        self.push(BoundRule::Min(n.into()))
    }

    /// Require a value of at least `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is NaN or infinite.
    pub fn min(self, n: impl Into<f64>) -> Self {
        self.try_min(n).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Require a value of at most `n`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBound` if `n` is NaN or infinite.
    pub fn try_max(self, n: impl Into<f64>) -> Result<Self, SchemaConfigError> {
        self.push(BoundRule::Max(n.into()))
    }

    /// Require a value of at most `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is NaN or infinite.
    pub fn max(self, n: impl Into<f64>) -> Self {
        self.try_max(n).unwrap_or_else(|e| panic!("{e}"))
    }

    fn push(mut self, rule: BoundRule) -> Result<Self, SchemaConfigError> {
        let (name, bound) = match rule {
            BoundRule::Min(n) => ("minimum", n),
            BoundRule::Max(n) => ("maximum", n),
        };
        if !bound.is_finite() {
            tracing::warn!(rule = name, %bound, "rejected non-finite number bound");
            return Err(SchemaConfigError::InvalidBound { rule: name, bound: bound.to_string() });
        }
        self.rules.push(rule);
        Ok(self)
    }

    /// Declared rules in evaluation order.
    pub fn rules(&self) -> &[BoundRule] {
        &self.rules
    }
}

impl Schema for NumberSchema {
    fn validate(&self, input: Option<&Value>) -> ValidationResult {
        let value = match admit(self.presence, input, TYPE_NAME, ErrorKind::Required) {
            Ok(value) => value,
            Err(done) => return done,
        };
        let Value::Number(number) = value else {
            return type_mismatch(TYPE_NAME, value);
        };

        self.rules
            .iter()
            .find_map(|rule| rule.check(number))
            .unwrap_or_else(|| ValidationResult::success(Some(value.clone())))
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
    fn test_valid_number() {
        let r = NumberSchema::new().validate_value(&json!(42));
        assert!(r.is_valid());
        assert_eq!(r.value(), Some(&json!(42)));
    }

    #[test]
    fn test_below_min() {
        let r = NumberSchema::new().min(5).validate_value(&json!(3));
        assert_eq!(r.errors().len(), 1);
        let e = &r.errors()[0];
        assert_eq!(e.kind, ErrorKind::RuleViolation);
        assert_eq!(e.message, "required: minimum of 5, received: 3");
        assert!(e.path.is_empty());
    }

    #[test]
    fn test_above_max() {
        let r = NumberSchema::new().max(15).validate_value(&json!(20));
        assert_eq!(r.errors()[0].kind, ErrorKind::RuleViolation);
        assert_eq!(r.errors()[0].message, "required: maximum of 15, received: 20");
    }

    #[test]
    fn test_within_bounds() {
        assert!(NumberSchema::new().min(5).validate_value(&json!(10)).is_valid());
        assert!(NumberSchema::new().max(15).validate_value(&json!(10)).is_valid());
    }

    #[test]
    fn test_zero_is_present() {
        let schema = NumberSchema::new().min(0).max(100);
        assert!(schema.validate_value(&json!(0)).is_valid());
    }

    #[test]
    fn test_inclusive_bounds() {
        let schema = NumberSchema::new().min(1.5).max(2.5);
        assert!(schema.validate_value(&json!(1.5)).is_valid());
        assert!(schema.validate_value(&json!(2.5)).is_valid());
        let r = schema.validate_value(&json!(2.75));
        assert_eq!(r.errors()[0].message, "required: maximum of 2.5, received: 2.75");
    }

    #[test]
    fn test_negative_and_large_integers() {
        assert!(!NumberSchema::new().min(0).validate_value(&json!(-1)).is_valid());
        assert!(NumberSchema::new().min(0).validate_value(&json!(u64::MAX)).is_valid());
    }

    #[test]
    fn test_missing_required() {
        let r = NumberSchema::new().validate(None);
        assert_eq!(r.errors()[0].kind, ErrorKind::Required);
        assert_eq!(r.errors()[0].message, "required: number, received: undefined");
    }

    #[test]
    fn test_missing_optional() {
        assert!(NumberSchema::new().optional().validate(None).is_valid());
    }

    #[test]
    fn test_wrong_type() {
        let r = NumberSchema::new().validate_value(&json!("not a number"));
        assert_eq!(r.errors()[0].kind, ErrorKind::TypeMismatch);
        assert_eq!(r.errors()[0].message, "required: number, received: string");
    }

    #[test]
    fn test_numeric_string_is_not_coerced() {
        let r = NumberSchema::new().validate_value(&json!("42"));
        assert_eq!(r.errors()[0].kind, ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_null_is_type_mismatch() {
        let r = NumberSchema::new().validate_value(&Value::Null);
        assert_eq!(r.errors()[0].kind, ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_non_finite_bound_rejected() {
        let err = NumberSchema::new().try_max(f64::NAN).unwrap_err();
        assert_eq!(
            err,
            SchemaConfigError::InvalidBound { rule: "maximum", bound: "NaN".into() }
        );
        assert!(NumberSchema::new().try_min(f64::NEG_INFINITY).is_err());
        assert!(NumberSchema::new().try_min(f64::MAX).is_ok());
    }

    #[test]
    #[should_panic(expected = "number bounds must be finite")]
    fn test_infinite_bound_panics() {
        let _ = NumberSchema::new().max(f64::INFINITY);
    }

    #[test]
    fn test_huge_number_against_finite_bound() {
        let r = NumberSchema::new().max(f64::MAX).validate_value(&json!(1e300));
        assert!(r.is_valid());
        let r = NumberSchema::new().max(1e299).validate_value(&json!(1e300));
        assert_eq!(r.errors()[0].kind, ErrorKind::RuleViolation);
    }

    #[test]
    fn test_rules_recorded_in_order() {
        let schema = NumberSchema::new().max(10).min(-3);
        assert_eq!(schema.rules(), &[BoundRule::Max(10.0), BoundRule::Min(-3.0)]);
    }
}
