//! Dynamic value helpers
//!
//! Serialization round-trip cloning and dotted-path lookup into nested
//! mappings.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Clone a value by round-tripping it through `serde_json::Value`.
///
/// Lossy exactly where JSON is lossy: values JSON cannot represent (for
/// example non-string map keys or non-finite floats) produce an error
/// rather than a panic.
pub fn deep_clone<T>(value: &T) -> Result<T, CloneError>
where
    T: Serialize + DeserializeOwned,
{
    let intermediate =
        serde_json::to_value(value).map_err(|e| CloneError::Serialize(e.to_string()))?;
    serde_json::from_value(intermediate).map_err(|e| CloneError::Deserialize(e.to_string()))
}

/// Look up a value by dot-separated path.
///
/// Any missing segment or non-mapping intermediate yields `None`.
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for part in path.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

/// Look up a string value by dot-separated path
pub fn get_str<'a>(value: &'a Value, path: &str) -> Option<&'a str> {
    get_path(value, path).and_then(|v| v.as_str())
}

/// Look up a boolean value by dot-separated path
pub fn get_bool(value: &Value, path: &str) -> Option<bool> {
    get_path(value, path).and_then(|v| v.as_bool())
}

/// Look up an unsigned integer value by dot-separated path
pub fn get_u64(value: &Value, path: &str) -> Option<u64> {
    get_path(value, path).and_then(|v| v.as_u64())
}

/// Look up a float value by dot-separated path
pub fn get_f64(value: &Value, path: &str) -> Option<f64> {
    get_path(value, path).and_then(|v| v.as_f64())
}

/// Errors from the serialization round-trip clone
#[derive(Debug, thiserror::Error)]
pub enum CloneError {
    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("deserialize error: {0}")]
    Deserialize(String),
}
