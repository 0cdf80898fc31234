//! # Document Loading
//!
//! Reads the untyped input handed to a schema. YAML documents are
//! converted to `serde_json::Value` so every validator sees one value model.

use std::path::Path;

use serde_json::Value;

use crate::error::{LoadError, INLINE};

/// Load a JSON or YAML document from disk.
///
/// The format is chosen by extension: `.yaml`/`.yml` is YAML, anything
/// else is JSON.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, and the matching
/// parse or conversion variant if its contents are malformed.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let origin = path.display().to_string();

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => parse_yaml(&content, &origin),
        _ => serde_json::from_str(&content).map_err(|e| LoadError::InvalidJson {
            origin,
            reason: e.to_string(),
        }),
    }
}

/// Parse YAML text into a JSON value.
///
/// # Errors
///
/// Returns `LoadError::InvalidYaml` for malformed text and
/// `LoadError::Conversion` for YAML that has no JSON equivalent.
pub fn yaml_str_to_json(text: &str) -> Result<Value, LoadError> {
    parse_yaml(text, INLINE)
}

fn parse_yaml(text: &str, origin: &str) -> Result<Value, LoadError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(text).map_err(|e| LoadError::InvalidYaml {
        origin: origin.to_string(),
        reason: e.to_string(),
    })?;
    yaml_to_json_value(&yaml).map_err(|reason| LoadError::Conversion {
        origin: origin.to_string(),
        reason,
    })
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Tags are dropped. Map keys must be strings, numbers or booleans.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(u.into()))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
