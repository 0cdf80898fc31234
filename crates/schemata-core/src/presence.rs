//! # Presence Flag
//!
//! Tri-state required/optional flag owned by every schema.
//!
//! A fresh schema is `Unset`, which validates exactly like `Required`.
//! The flag may be set once. Any second call, conflicting or not, is a
//! [`SchemaConfigError::ConflictingPresence`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaConfigError;

/// Whether a schema accepts a missing value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Never configured. Treated as required.
    #[default]
    Unset,
    /// Explicitly required.
    Required,
    /// Missing values validate successfully.
    Optional,
}

impl Presence {
    /// Returns true only for [`Presence::Optional`].
    pub fn allows_missing(&self) -> bool {
        matches!(self, Self::Optional)
    }

    /// Transition from `self` to `requested`.
    ///
    /// # Errors
    ///
    /// Returns `ConflictingPresence` unless `self` is `Unset` and
    /// `requested` is not.
    pub fn transition(self, requested: Presence) -> Result<Presence, SchemaConfigError> {
        match (self, requested) {
            (Self::Unset, Self::Required | Self::Optional) => Ok(requested),
            (current, requested) => Err(SchemaConfigError::ConflictingPresence { current, requested }),
        }
    }

    /// Returns the snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Required => "required",
            Self::Optional => "optional",
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
