//! # Validation Result
//!
//! The outcome of one `validate` call.
//!
//! ## Invariant
//!
//! `valid == true` iff the error list is absent, and `valid == false` iff it
//! is present and non-empty. The constructors are the only way to build a
//! result, so the invariant holds by construction.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ValidationError, ValidationErrors};

/// Outcome of validating one input against one schema.
///
/// Serializes as `{"valid": .., "error": [..]?, "value": ..?}`, omitting
/// absent fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Vec<ValidationError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

impl ValidationResult {
    /// A successful result echoing the accepted input.
    ///
    /// `value` is `None` when an optional schema accepted a missing input.
    pub fn success(value: Option<Value>) -> Self {
        Self {
            valid: true,
            error: None,
            value,
        }
    }

    /// A failed result carrying exactly one error.
    pub fn failure(error: ValidationError) -> Self {
        Self {
            valid: false,
            error: Some(vec![error]),
            value: None,
        }
    }

    /// Returns true if the input was accepted.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The errors, empty when valid.
    pub fn errors(&self) -> &[ValidationError] {
        self.error.as_deref().unwrap_or_default()
    }

    /// The echoed input. Only meaningful when valid.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Prepend `segment` to the path of every error.
    ///
    /// A valid result is returned unchanged.
    pub fn prefixed(self, segment: &str) -> Self {
        match self.error {
            Some(errors) => Self {
                valid: false,
                error: Some(errors.into_iter().map(|e| e.with_prefix(segment)).collect()),
                value: None,
            },
            None => self,
        }
    }

    /// Convert into a `Result` so callers can propagate failures with `?`.
    ///
    /// # Errors
    ///
    /// Returns the collected [`ValidationErrors`] when the input was rejected.
    pub fn into_result(self) -> Result<Option<Value>, ValidationErrors> {
        match self.error {
            Some(errors) => Err(ValidationErrors::new(errors)),
            None => Ok(self.value),
        }
    }
}
