//! Declarative per-call request options.

use reqwest::Method;
use std::collections::HashMap;

/// HTTP request body type
#[derive(Debug)]
pub enum RequestBody {
    /// Structured value serialized as JSON
    Json(serde_json::Value),
    /// Raw string passed through unmodified
    Raw(String),
    /// Multipart form body; the transport layer owns the boundary Content-Type
    Multipart(reqwest::multipart::Form),
}

/// Describes one outgoing call.
///
/// A single-use value: `RequestExecutor::execute` consumes it, since
/// multipart forms cannot be rebuilt. Defaults follow the application's
/// conventions: POST, authenticated, error dialog enabled.
#[derive(Debug)]
pub struct RequestOptions {
    /// Server-relative path, combined with the base URL by concatenation
    pub endpoint: String,
    /// HTTP method, default POST
    pub method: Method,
    /// Optional request body
    pub body: Option<RequestBody>,
    /// Extra headers merged over (and able to override) the defaults
    pub headers: HashMap<String, String>,
    /// Attach the bearer token header, default true
    pub include_auth: bool,
    /// Confirmation dialog text shown when the call succeeds
    pub success_message: Option<String>,
    /// Navigation target applied after success (and after any confirmation
    /// dialog is dismissed)
    pub redirect_on_success: Option<String>,
    /// Surface failures as an error dialog, default true
    pub show_error_alert: bool,
}

impl RequestOptions {
    /// Options for `endpoint` with the default POST method.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::POST,
            body: None,
            headers: HashMap::new(),
            include_auth: true,
            success_message: None,
            redirect_on_success: None,
            show_error_alert: true,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set a structured JSON body.
    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(value));
        self
    }

    /// Set a raw string body, passed through unmodified.
    pub fn raw(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Raw(body.into()));
        self
    }

    /// Set a multipart form body.
    pub fn multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    /// Add one extra header; overrides a default header of the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Skip the bearer token header (login, public listings).
    pub fn without_auth(mut self) -> Self {
        self.include_auth = false;
        self
    }

    /// Show a confirmation dialog with `text` when the call succeeds.
    pub fn success_message(mut self, text: impl Into<String>) -> Self {
        self.success_message = Some(text.into());
        self
    }

    /// Navigate to `target` after success.
    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.redirect_on_success = Some(target.into());
        self
    }

    /// Suppress the error dialog; the caller still inspects the outcome.
    pub fn silent(mut self) -> Self {
        self.show_error_alert = false;
        self
    }
}
