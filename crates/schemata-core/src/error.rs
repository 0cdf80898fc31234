//! # Error Model
//!
//! Defines the vocabulary of validation failures and the configuration
//! error raised when a schema builder is misused.
//!
//! ## Design
//!
//! - A validation failure is a [`ValidationError`]: kind, rendered message,
//!   and the field path from the root record to the offending value.
//! - Messages are always produced by [`build_error`] from an
//!   expected/received pair. The template text is a compatibility contract.
//! - Configuration misuse ([`SchemaConfigError`]) is a programmer error and
//!   is never reported through a `ValidationResult`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::presence::Presence;

/// The closed set of validation failure kinds.
///
/// A single validation attempt of a single value reports at most one kind.
/// The pipeline order (absence, type, rules) decides which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// The value is absent and the schema is not optional.
    Required,
    /// The value is present but of the wrong JSON type.
    TypeMismatch,
    /// The value has the right type but fails a declared constraint.
    RuleViolation,
}

impl ErrorKind {
    /// Returns the wire identifier for this kind.
    ///
    /// Matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TypeMismatch => "typeMismatch",
            Self::RuleViolation => "ruleViolation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// What kind of failure this is.
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    /// Human-readable message rendered by [`build_error`].
    pub message: String,
    /// Field chain from the root record to the offending value.
    /// Empty for a root-level failure.
    pub path: Vec<String>,
}

impl ValidationError {
    /// Returns the same error relocated under `segment`.
    ///
    /// Enclosing object validators call this as an error unwinds, so the
    /// outermost field ends up first.
    pub fn with_prefix(mut self, segment: impl Into<String>) -> Self {
        self.path.insert(0, segment.into());
        self
    }

    /// Returns the same error with its path replaced.
    pub fn at(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }

    /// The path joined with `.`, or an empty string at the root.
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.dotted_path(), self.message)
        }
    }
}

/// Build a [`ValidationError`] from an `(expected, received)` description pair.
///
/// The message is always `required: {expected}, received: {received}`,
/// whatever the kind. Pure; no side effects.
pub fn build_error(
    kind: ErrorKind,
    (expected, received): (&str, &str),
    path: Vec<String>,
) -> ValidationError {
    ValidationError {
        kind,
        message: format!("required: {expected}, received: {received}"),
        path,
    }
}

/// A non-empty collection of validation failures, usable as an `Err` value.
///
/// Produced by [`ValidationResult::into_result`](crate::ValidationResult::into_result).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns a slice of all errors.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Misuse of a schema builder, detected at configuration time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaConfigError {
    /// `optional()`/`required()` called on a schema whose presence was
    /// already set.
    #[error("conflicting presence: schema is already {current}, cannot mark it {requested}")]
    ConflictingPresence {
        /// Presence already recorded on the schema.
        current: Presence,
        /// Presence the caller tried to set.
        requested: Presence,
    },

    /// The same field name was declared twice on one object schema.
    #[error("duplicate field '{0}' in object schema")]
    DuplicateField(String),

    /// A number bound is NaN or infinite.
    #[error("invalid {rule} bound {bound}: number bounds must be finite")]
    InvalidBound {
        /// `minimum` or `maximum`.
        rule: &'static str,
        /// The rejected bound, rendered.
        bound: String,
    },
}
