//! Response decoding shared by every endpoint group.
//!
//! Text-returning endpoints wrap their result in a small JSON object whose key
//! differs per endpoint. Instead of each group guessing, every endpoint passes
//! an ordered list of candidate keys to [`decode_text`].

use crate::error::PopcatError;

use serde_json::Value;

/// Keys produced by the text transform endpoints.
pub const TEXT_KEYS: &[&str] = &["translated", "text", "morse", "binary", "decoded"];

pub const JOKE_KEYS: &[&str] = &["joke"];
pub const FACT_KEYS: &[&str] = &["fact"];
pub const ANSWER_KEYS: &[&str] = &["answer"];

/// Parse a body that must be JSON.
#[track_caller]
pub fn decode_json(endpoint: &str, body: &str) -> Result<Value, PopcatError> {
    serde_json::from_str(body).map_err(|error| {
        PopcatError::decode(endpoint, format!("response is not valid JSON: {error}"))
    })
}

/// Pull a single string out of a response body.
///
/// Resolution order:
/// 1. body is not JSON: the raw body
/// 2. JSON string: that string
/// 3. JSON object: the first key in `keys` holding a string, then the first
///    string-typed value in the object, then the object rendered as JSON
/// 4. any other JSON: rendered as JSON
pub fn decode_text(body: &str, keys: &[&str]) -> String {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return body.to_string(),
    };

    if let Value::Object(map) = &value {
        return keys
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .or_else(|| map.values().find_map(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string());
    }

    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}
