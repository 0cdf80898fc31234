//! # Schema Descriptors
//!
//! Declares a schema tree in YAML (or JSON, parsed as YAML) and builds
//! the equivalent validators.
//!
//! ```yaml
//! type: object
//! fields:
//!   name: { type: string, min: 2, max: 40 }
//!   age: { type: number, min: 0 }
//!   active: { type: boolean, optional: true }
//! ```
//!
//! `fields` keeps document order, which becomes the field check order.
//! `min` is always applied before `max`. Setting both `optional` and
//! `required` is rejected the same way chained builder calls are, and so
//! are keys a schema kind does not know and non-finite number bounds.

use std::fmt;
use std::path::Path;

use schemata_core::SchemaConfigError;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{LoadError, INLINE};
use crate::{BooleanSchema, NumberSchema, ObjectSchema, Schema, StringSchema};

/// Declarative form of a schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum SchemaDescriptor {
    /// A [`StringSchema`].
    String {
        /// Minimum length in UTF-16 code units.
        #[serde(default)]
        min: Option<usize>,
        /// Maximum length in UTF-16 code units.
        #[serde(default)]
        max: Option<usize>,
        /// Accept a missing value.
        #[serde(default)]
        optional: bool,
        /// Explicitly required.
        #[serde(default)]
        required: bool,
    },
    /// A [`NumberSchema`].
    Number {
        /// Inclusive lower bound.
        #[serde(default)]
        min: Option<f64>,
        /// Inclusive upper bound.
        #[serde(default)]
        max: Option<f64>,
        /// Accept a missing value.
        #[serde(default)]
        optional: bool,
        /// Explicitly required.
        #[serde(default)]
        required: bool,
    },
    /// A [`BooleanSchema`].
    Boolean {
        /// Accept a missing value.
        #[serde(default)]
        optional: bool,
        /// Explicitly required.
        #[serde(default)]
        required: bool,
    },
    /// An [`ObjectSchema`].
    Object {
        /// Child schemas in check order.
        #[serde(default)]
        fields: Fields,
        /// Accept a missing value.
        #[serde(default)]
        optional: bool,
        /// Explicitly required.
        #[serde(default)]
        required: bool,
    },
}

/// Ordered field declarations of an object descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(pub Vec<(String, SchemaDescriptor)>);

impl<'de> Deserialize<'de> for Fields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = Fields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to schema descriptors")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Fields, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, descriptor)) = map.next_entry::<String, SchemaDescriptor>()? {
                    fields.push((name, descriptor));
                }
                Ok(Fields(fields))
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

impl SchemaDescriptor {
    /// Parse a descriptor from YAML or JSON text.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidYaml` if the text is malformed or does
    /// not describe a schema.
    pub fn from_yaml_str(text: &str) -> Result<Self, LoadError> {
        parse(text, INLINE)
    }

    /// Read and parse a descriptor file.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be read and
    /// `LoadError::InvalidYaml` if it cannot be parsed.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let descriptor = parse(&text, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), kind = descriptor.type_name(), "loaded schema descriptor");
        Ok(descriptor)
    }

    /// JSON type name of the described schema.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String { .. } => "string",
            Self::Number { .. } => "number",
            Self::Boolean { .. } => "boolean",
            Self::Object { .. } => "object",
        }
    }

    /// Build the validator tree.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Config` for conflicting presence flags,
    /// non-finite number bounds or duplicate field names anywhere in the tree.
    pub fn build(&self) -> Result<Box<dyn Schema>, LoadError> {
        let schema = match self {
            Self::String { min, max, optional, required } => {
                let mut schema = StringSchema::new();
                if let Some(n) = min {
                    schema = schema.min(*n);
                }
                if let Some(n) = max {
                    schema = schema.max(*n);
                }
                with_presence(schema, *optional, *required)?.boxed()
            }
            Self::Number { min, max, optional, required } => {
                let mut schema = NumberSchema::new();
                if let Some(n) = min {
                    schema = schema.try_min(*n)?;
                }
                if let Some(n) = max {
                    schema = schema.try_max(*n)?;
                }
                with_presence(schema, *optional, *required)?.boxed()
            }
            Self::Boolean { optional, required } => {
                with_presence(BooleanSchema::new(), *optional, *required)?.boxed()
            }
            Self::Object { fields, optional, required } => {
                let mut schema = ObjectSchema::new();
                for (name, child) in &fields.0 {
                    schema.insert(name.clone(), child.build()?)?;
                }
                with_presence(schema, *optional, *required)?.boxed()
            }
        };
        Ok(schema)
    }
}

/// Load a descriptor file and build its validator tree.
///
/// # Errors
///
/// See [`SchemaDescriptor::from_path`] and [`SchemaDescriptor::build`].
pub fn load_schema(path: &Path) -> Result<Box<dyn Schema>, LoadError> {
    SchemaDescriptor::from_path(path)?.build()
}

fn parse(text: &str, origin: &str) -> Result<SchemaDescriptor, LoadError> {
    serde_yaml::from_str(text).map_err(|e| LoadError::InvalidYaml {
        origin: origin.to_string(),
        reason: e.to_string(),
    })
}

fn with_presence<S: Schema>(mut schema: S, optional: bool, required: bool) -> Result<S, SchemaConfigError> {
    if optional {
        schema = schema.try_optional()?;
    }
    if required {
        schema = schema.try_required()?;
    }
    Ok(schema)
}
