//! Duck-typed response field extraction.
//!
//! The backend contract is loosely typed; call sites read server fields with
//! fallbacks (`adminID` vs `id`, `name` vs first/last name). These named
//! helpers encode each fallback chain in one place instead of ad hoc
//! branching at every screen.

use serde_json::Value;

/// Record identifier: `adminID`, `needyID` or `id`.
pub fn record_id(payload: &Value) -> Option<i64> {
    ["adminID", "needyID", "id"]
        .iter()
        .find_map(|key| payload.get(key).and_then(Value::as_i64))
}

/// Role reported for a logged-in user.
pub fn user_role(payload: &Value) -> Option<&str> {
    payload.get("userRole").and_then(Value::as_str)
}

/// Display name: `name`, else `firstName` and `lastName` joined.
pub fn display_name(payload: &Value) -> Option<String> {
    if let Some(name) = payload.get("name").and_then(Value::as_str) {
        return Some(name.to_string());
    }
    let first = payload.get("firstName").and_then(Value::as_str);
    let last = payload.get("lastName").and_then(Value::as_str);
    match (first, last) {
        (Some(first), Some(last)) => Some(format!("{first} {last}")),
        (Some(first), None) => Some(first.to_string()),
        (None, Some(last)) => Some(last.to_string()),
        (None, None) => None,
    }
}
