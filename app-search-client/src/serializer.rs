//! Wire payload encoding and decoding.
//!
//! Isolates the JSON quirks of the App Search API from the rest of the
//! client: pre-encoded string payloads pass through untouched, empty
//! collections encode as `{}` because the API expects object semantics even
//! when no entries are present, and responses are only decoded when their
//! content type says they are JSON.

use std::collections::HashMap;

use serde_json::Value;

use crate::errors::ClientError;

/// Encode a value into a wire payload string.
///
/// A `Value::String` is returned unchanged so callers can hand over
/// pre-encoded payloads. An empty array or empty object encodes as `"{}"`.
/// Zero-fraction numbers keep their formatting (`1.0` stays `1.0`).
pub fn serialize(value: &Value) -> String {
    match value {
        Value::String(raw) => raw.clone(),
        Value::Array(items) if items.is_empty() => "{}".to_string(),
        Value::Object(entries) if entries.is_empty() => "{}".to_string(),
        other => other.to_string(),
    }
}

/// Decode a response payload by introspecting the `content_type` header.
///
/// Non-JSON content types pass through as a raw string. Empty input decodes
/// to an empty string sentinel, never to null and never to an error.
/// Malformed non-empty JSON fails with
/// [`ClientError::MalformedResponse`] carrying the raw payload.
pub fn deserialize(data: &str, headers: &HashMap<String, String>) -> Result<Value, ClientError> {
    if let Some(content_type) = headers.get("content_type") {
        if !content_type.contains("json") {
            return Ok(Value::String(data.to_string()));
        }
    }

    decode(data)
}

fn decode(data: &str) -> Result<Value, ClientError> {
    if data.is_empty() {
        return Ok(Value::String(String::new()));
    }

    serde_json::from_str(data).map_err(|e| ClientError::malformed_response(&e, data))
}
