//! Generic request executor.
//!
//! Issues exactly one HTTP call described by a [`RequestOptions`] value and
//! resolves to an [`ApiOutcome`], performing all cross-cutting concerns:
//! header assembly, body encoding, transport, response decoding, outcome
//! classification, and the caller-requested user feedback and navigation.
//!
//! The executor is single-shot: no retry, no internal timeout, no shared
//! state between calls. Every internal failure is folded into the returned
//! outcome; `execute` never panics and never propagates an error.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::execution::decode::decode_body;
use crate::execution::failure::failure_message;
use crate::execution::http::headers::merge_headers;
use crate::execution::http::transport::{HttpTransport, TransportRequest};
use crate::interact::{Navigator, NoopNavigator, NoopNotifier, Notifier};
use crate::types::outcome::ApiOutcome;
use crate::types::request::{RequestBody, RequestOptions};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use std::collections::HashMap;
use std::sync::Arc;

/// Response normalized across transports.
struct RawResponse {
    status: u16,
    content_type: Option<String>,
    text: String,
}

/// Executes one call per invocation; safe to share across concurrent callers.
pub struct RequestExecutor {
    config: ClientConfig,
    http_client: reqwest::Client,
    transport: Option<Arc<dyn HttpTransport>>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl RequestExecutor {
    pub fn builder(config: ClientConfig) -> RequestExecutorBuilder {
        RequestExecutorBuilder::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute one call.
    ///
    /// Steps, in order: assemble headers (defaults overlaid by the caller's,
    /// caller wins), encode the body, perform the transport call, decode the
    /// response best-effort, classify by status code, and run the requested
    /// side effects. A redirect runs only after the success dialog resolves.
    pub async fn execute(&self, options: RequestOptions) -> ApiOutcome {
        let RequestOptions {
            endpoint,
            method,
            body,
            headers,
            include_auth,
            success_message,
            redirect_on_success,
            show_error_alert,
        } = options;

        let url = self.config.endpoint_url(&endpoint);
        tracing::debug!(target: "takaful::http", method = %method, url = %url, "sending request");

        let raw = match self.send(method, &url, &headers, include_auth, body).await {
            Ok(raw) => raw,
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(target: "takaful::http", url = %url, err = %message, "request failed");
                if show_error_alert {
                    self.notifier.alert_error(&message);
                }
                return ApiOutcome::failed(message);
            }
        };

        tracing::debug!(target: "takaful::http", url = %url, status = raw.status, "response received");
        let payload = decode_body(raw.content_type.as_deref(), raw.text);

        if (200..300).contains(&raw.status) {
            let message = payload
                .server_message()
                .map(str::to_string)
                .or_else(|| success_message.clone());
            let data = payload.into_data();
            if let Some(text) = &success_message {
                // Navigation is sequenced after dialog dismissal, never
                // concurrent with it.
                self.notifier.confirm(text).await;
                if let Some(target) = &redirect_on_success {
                    self.navigator.redirect(target);
                }
            } else if let Some(target) = &redirect_on_success {
                self.navigator.redirect(target);
            }
            ApiOutcome::ok(data, message)
        } else {
            let message = failure_message(raw.status, &payload);
            tracing::warn!(
                target: "takaful::http",
                url = %url,
                status = raw.status,
                err = %message,
                "request rejected"
            );
            if show_error_alert {
                self.notifier.alert_error(&message);
            }
            ApiOutcome::failed(message)
        }
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        extra_headers: &HashMap<String, String>,
        include_auth: bool,
        body: Option<RequestBody>,
    ) -> Result<RawResponse, ClientError> {
        let base_headers = self.config.default_headers(include_auth)?;
        let mut headers = merge_headers(base_headers, extra_headers);

        let bytes = match body {
            Some(RequestBody::Multipart(form)) => {
                // Multipart must own its boundary-based Content-Type; strip
                // the JSON default so the transport layer can set it.
                headers.remove(CONTENT_TYPE);
                return self.send_multipart(method, url, headers, form).await;
            }
            Some(RequestBody::Raw(text)) => Some(text.into_bytes()),
            Some(RequestBody::Json(value)) => Some(serde_json::to_vec(&value).map_err(|e| {
                ClientError::Configuration(format!("Failed to serialize request body: {e}"))
            })?),
            None => None,
        };

        if let Some(transport) = &self.transport {
            let response = transport
                .execute(TransportRequest {
                    method,
                    url: url.to_string(),
                    headers,
                    body: bytes,
                })
                .await?;
            let content_type = header_str(&response.headers, CONTENT_TYPE);
            return Ok(RawResponse {
                status: response.status,
                content_type,
                text: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        let mut rb = self.http_client.request(method, url).headers(headers);
        if let Some(bytes) = bytes {
            rb = rb.body(bytes);
        }
        self.send_builder(rb).await
    }

    async fn send_multipart(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        form: reqwest::multipart::Form,
    ) -> Result<RawResponse, ClientError> {
        let rb = self
            .http_client
            .request(method, url)
            .headers(headers)
            .multipart(form);
        self.send_builder(rb).await
    }

    async fn send_builder(&self, rb: reqwest::RequestBuilder) -> Result<RawResponse, ClientError> {
        let resp = rb
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let content_type = header_str(resp.headers(), CONTENT_TYPE);
        let text = resp
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(RawResponse {
            status,
            content_type,
            text,
        })
    }
}

fn header_str(headers: &HeaderMap, name: reqwest::header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Builder for [`RequestExecutor`].
pub struct RequestExecutorBuilder {
    config: ClientConfig,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
    notifier: Option<Arc<dyn Notifier>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl RequestExecutorBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http_client: None,
            transport: None,
            notifier: None,
            navigator: None,
        }
    }

    /// Use a pre-built HTTP client instead of one derived from the config.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Route non-multipart requests through a custom transport.
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn build(self) -> Result<RequestExecutor, ClientError> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => self.config.build_http_client()?,
        };
        Ok(RequestExecutor {
            config: self.config,
            http_client,
            transport: self.transport,
            notifier: self.notifier.unwrap_or_else(|| Arc::new(NoopNotifier)),
            navigator: self.navigator.unwrap_or_else(|| Arc::new(NoopNavigator)),
        })
    }
}
