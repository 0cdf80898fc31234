//! Errors raised while loading schema descriptors and documents.
//!
//! Validation failures never appear here; they are reported through
//! `ValidationResult`.

use schemata_core::SchemaConfigError;
use thiserror::Error;

/// Error loading a descriptor or document from text or disk.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {reason}")]
    Io {
        /// Path that failed to load.
        path: String,
        /// Underlying IO failure.
        reason: String,
    },

    /// The text is not valid YAML, or does not describe a schema.
    #[error("invalid YAML in {origin}: {reason}")]
    InvalidYaml {
        /// Path, or `<inline>` for in-memory text.
        origin: String,
        /// Parser message.
        reason: String,
    },

    /// The text is not valid JSON.
    #[error("invalid JSON in {origin}: {reason}")]
    InvalidJson {
        /// Path, or `<inline>` for in-memory text.
        origin: String,
        /// Parser message.
        reason: String,
    },

    /// A YAML document uses something JSON cannot represent.
    #[error("YAML-to-JSON conversion failed for {origin}: {reason}")]
    Conversion {
        /// Path, or `<inline>` for in-memory text.
        origin: String,
        /// What could not be converted.
        reason: String,
    },

    /// The descriptor configures a schema inconsistently.
    #[error("schema configuration error: {0}")]
    Config(#[from] SchemaConfigError),
}

/// Origin label for text that did not come from a file.
pub(crate) const INLINE: &str = "<inline>";
