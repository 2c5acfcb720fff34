//! Response payload decoding.
//!
//! The backend contract is loosely typed: success bodies are JSON objects
//! whose fields are consumed ad hoc by callers, error bodies may be JSON,
//! plain text or empty. Decoding is best-effort and never fails: a body
//! that cannot be parsed degrades to raw text, and classification proceeds
//! purely on the status code.

use serde_json::Value;

/// Decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Structured JSON value
    Json(Value),
    /// Non-empty body that is not valid JSON
    Text(String),
    /// Empty body (e.g. 204 responses)
    Empty,
}

impl Payload {
    /// Server-reported `message` field, when the payload is structured JSON.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Payload::Json(value) => value.get("message").and_then(Value::as_str),
            _ => None,
        }
    }

    /// The payload as a result value: JSON as-is, text as a JSON string,
    /// empty as nothing.
    pub fn into_data(self) -> Option<Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(text) => Some(Value::String(text)),
            Payload::Empty => None,
        }
    }
}

/// Decode a response body with a best-effort JSON parse.
pub fn decode_body(content_type: Option<&str>, text: String) -> Payload {
    if text.is_empty() {
        return Payload::Empty;
    }
    match serde_json::from_str(&text) {
        Ok(value) => Payload::Json(value),
        Err(err) => {
            if content_type.is_some_and(|ct| ct.contains("json")) {
                tracing::warn!(target: "takaful::http", err = %err, "declared JSON body failed to parse");
            }
            Payload::Text(text)
        }
    }
}
