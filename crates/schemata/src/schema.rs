//! # Schema Contract
//!
//! The capability surface shared by every validator kind. The object
//! validator holds its children as `Box<dyn Schema>` and never needs to
//! know which concrete kind it is calling.
//!
//! ## Pipeline
//!
//! Every kind runs the same fixed order:
//!
//! 1. missing + optional → success, nothing echoed
//! 2. missing + not optional → one error (kind decided by the validator)
//! 3. wrong JSON type → one `typeMismatch`
//! 4. declared rules in declaration order, first failure wins
//! 5. success, input echoed
//!
//! Steps 1 and 2 are shared through [`admit`].
//!
//! ## Thread Safety
//!
//! `Schema` requires `Send + Sync`. Validation takes `&self` and never
//! mutates the schema, so one configured schema can serve any number of
//! threads.

use std::fmt;

use schemata_core::{build_error, ErrorKind, Presence, SchemaConfigError, ValidationResult, MISSING};
use serde_json::Value;

/// A configured, reusable validator for one data shape.
pub trait Schema: fmt::Debug + Send + Sync {
    /// Validate a possibly missing input. `None` is the missing sentinel;
    /// `Some(&Value::Null)` is a present null.
    fn validate(&self, input: Option<&Value>) -> ValidationResult;

    /// JSON type name this schema accepts, used as the expected description
    /// of absence and type errors.
    fn type_name(&self) -> &'static str;

    /// Current presence flag.
    fn presence(&self) -> Presence;

    /// Record a presence toggle.
    ///
    /// # Errors
    ///
    /// Returns `ConflictingPresence` if presence was already set.
    fn set_presence(&mut self, requested: Presence) -> Result<(), SchemaConfigError>;

    /// Returns true if a missing input validates successfully.
    fn is_optional(&self) -> bool {
        self.presence().allows_missing()
    }

    /// Validate a present value.
    fn validate_value(&self, input: &Value) -> ValidationResult {
        self.validate(Some(input))
    }

    /// Mark the schema as accepting a missing value.
    ///
    /// # Errors
    ///
    /// Returns `ConflictingPresence` if `optional` or `required` was
    /// already called on this schema.
    fn try_optional(mut self) -> Result<Self, SchemaConfigError>
    where
        Self: Sized,
    {
        self.set_presence(Presence::Optional)?;
        Ok(self)
    }

    /// Chaining form of [`try_optional`](Schema::try_optional).
    ///
    /// # Panics
    ///
    /// Panics if presence was already set on this schema.
    fn optional(self) -> Self
    where
        Self: Sized,
    {
        self.try_optional().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Mark the schema as explicitly required.
    ///
    /// # Errors
    ///
    /// Returns `ConflictingPresence` if `optional` or `required` was
    /// already called on this schema.
    fn try_required(mut self) -> Result<Self, SchemaConfigError>
    where
        Self: Sized,
    {
        self.set_presence(Presence::Required)?;
        Ok(self)
    }

    /// Chaining form of [`try_required`](Schema::try_required).
    ///
    /// # Panics
    ///
    /// Panics if presence was already set on this schema.
    fn required(self) -> Self
    where
        Self: Sized,
    {
        self.try_required().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Erase the concrete kind.
    fn boxed(self) -> Box<dyn Schema>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// Apply a presence transition to a schema's flag, logging conflicts.
pub(crate) fn transition(
    presence: &mut Presence,
    requested: Presence,
    type_name: &str,
) -> Result<(), SchemaConfigError> {
    match presence.transition(requested) {
        Ok(next) => {
            *presence = next;
            Ok(())
        }
        Err(e) => {
            tracing::warn!(schema = type_name, current = %presence, %requested, "rejected presence toggle");
            Err(e)
        }
    }
}

/// Steps 1 and 2 of the pipeline.
///
/// Returns the present value, or the finished result for a missing one.
/// `missing_kind` is the error kind reported for a missing required input.
pub(crate) fn admit<'a>(
    presence: Presence,
    input: Option<&'a Value>,
    type_name: &str,
    missing_kind: ErrorKind,
) -> Result<&'a Value, ValidationResult> {
    match input {
        Some(value) => Ok(value),
        None if presence.allows_missing() => Err(ValidationResult::success(None)),
        None => Err(ValidationResult::failure(build_error(
            missing_kind,
            (type_name, MISSING),
            Vec::new(),
        ))),
    }
}

/// Step 3 failure for a present value of the wrong type.
pub(crate) fn type_mismatch(type_name: &str, value: &Value) -> ValidationResult {
    ValidationResult::failure(build_error(
        ErrorKind::TypeMismatch,
        (type_name, schemata_core::type_name(value)),
        Vec::new(),
    ))
}
