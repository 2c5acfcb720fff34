//! The uniform outcome of any API call.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Result of one executed call.
///
/// Exactly one side is meaningfully populated: `data`/`message` when
/// `success` is true, `error` when it is false. `data` holds the decoded
/// payload as an untyped value; the backend contract is loosely typed and
/// different call sites expect different shapes; use [`ApiOutcome::decode`]
/// where a concrete shape is known.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiOutcome {
    pub success: bool,
    /// Decoded response payload; `None` for empty bodies.
    pub data: Option<Value>,
    /// Server-reported message, else the caller-supplied success message.
    pub message: Option<String>,
    /// Human-readable failure description.
    pub error: Option<String>,
}

impl ApiOutcome {
    /// Successful outcome.
    pub fn ok(data: Option<Value>, message: Option<String>) -> Self {
        Self {
            success: true,
            data,
            message,
            error: None,
        }
    }

    /// Failed outcome.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Deserialize the payload into a typed value.
    ///
    /// An absent payload decodes as JSON `null`, so `Option<T>` targets map
    /// empty bodies to `None` instead of failing.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.clone().unwrap_or(Value::Null))
    }
}
