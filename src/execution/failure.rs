//! Failure-message extraction.
//!
//! Centralizes the mapping from an HTTP error response to one human-readable
//! message, so individual call sites never branch on payload shape.

use crate::execution::decode::Payload;
use serde_json::Value;

/// Derive a human-readable message from a failed response.
///
/// Field precedence for structured payloads: `message`, then a non-empty
/// `detail` list (validation entries, `msg` fields joined by newlines), then
/// `error`, then a scalar `detail`. Unstructured bodies fall back to their
/// raw text, and everything else to a generic status line.
pub fn failure_message(status: u16, payload: &Payload) -> String {
    match payload {
        Payload::Json(value) => {
            if let Some(message) = value.get("message").and_then(Value::as_str) {
                return message.to_string();
            }
            if let Some(joined) = detail_list_message(value) {
                return joined;
            }
            if let Some(error) = value.get("error").and_then(Value::as_str) {
                return error.to_string();
            }
            if let Some(detail) = value.get("detail").and_then(Value::as_str) {
                return detail.to_string();
            }
            generic_message(status)
        }
        Payload::Text(text) => text.clone(),
        Payload::Empty => generic_message(status),
    }
}

/// Newline-joined messages from a `detail` validation list, when present.
fn detail_list_message(value: &Value) -> Option<String> {
    let entries = value.get("detail")?.as_array()?;
    if entries.is_empty() {
        return None;
    }
    let joined = entries
        .iter()
        .map(|entry| match entry.get("msg").and_then(Value::as_str) {
            Some(msg) => msg.to_string(),
            None => entry.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n");
    Some(joined)
}

fn generic_message(status: u16) -> String {
    format!("Request failed (HTTP {status})")
}
