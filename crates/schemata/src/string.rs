//! # String Validator
//!
//! Length is measured in UTF-16 code units, so `"é"` is 1 and `"😀"` is 2.
//! Bounds are inclusive.

use schemata_core::{build_error, ErrorKind, Presence, SchemaConfigError, ValidationResult};
use serde_json::Value;

use crate::schema::{admit, transition, type_mismatch, Schema};

const TYPE_NAME: &str = "string";

/// A declared length constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    /// Fails when the length is below the bound.
    Min(usize),
    /// Fails when the length is above the bound.
    Max(usize),
}

impl LengthRule {
    fn check(&self, len: usize) -> Option<ValidationResult> {
        let (expected, violated) = match *self {
            Self::Min(n) => (format!("minimum of {n} characters"), len < n),
            Self::Max(n) => (format!("maximum of {n} characters"), len > n),
        };
        violated.then(|| {
            ValidationResult::failure(build_error(
                ErrorKind::RuleViolation,
                (expected.as_str(), format!("{len} characters").as_str()),
                Vec::new(),
            ))
        })
    }
}

/// Schema for string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSchema {
    rules: Vec<LengthRule>,
    presence: Presence,
}

impl StringSchema {
    /// A required string schema with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `n` code units.
    pub fn min(mut self, n: usize) -> Self {
        self.rules.push(LengthRule::Min(n));
        self
    }

    /// Allow at most `n` code units.
    pub fn max(mut self, n: usize) -> Self {
        self.rules.push(LengthRule::Max(n));
        self
    }

    /// Declared rules in evaluation order.
    pub fn rules(&self) -> &[LengthRule] {
        &self.rules
    }
}

impl Schema for StringSchema {
    fn validate(&self, input: Option<&Value>) -> ValidationResult {
        let value = match admit(self.presence, input, TYPE_NAME, ErrorKind::Required) {
            Ok(value) => value,
            Err(done) => return done,
        };
        let Value::String(s) = value else {
            return type_mismatch(TYPE_NAME, value);
        };

        let len = s.encode_utf16().count();
        self.rules
            .iter()
            .find_map(|rule| rule.check(len))
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
