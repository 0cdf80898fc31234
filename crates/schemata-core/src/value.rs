//! JSON value naming used in error messages.

use serde_json::Value;

/// Description of a missing value.
pub const MISSING: &str = "undefined";

/// Returns the JSON type name of a present value.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
