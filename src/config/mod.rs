//! Client configuration.
//!
//! The configuration provider consumed by the executor: base URL, bearer
//! token and HTTP settings. The token is held as a [`SecretString`] and only
//! exposed at header-build time.

use crate::error::ClientError;
use crate::execution::http::headers::HttpHeaderBuilder;
use crate::types::http::HttpConfig;
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the server-relative endpoint paths are appended to.
    pub base_url: String,
    /// Bearer token attached to authenticated calls, when configured.
    pub bearer_token: Option<SecretString>,
    /// HTTP behavior settings.
    pub http: HttpConfig,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
            http: HttpConfig::default(),
        }
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(SecretString::from(token.into()));
        self
    }

    pub fn with_http(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    /// Default header set for one call.
    ///
    /// Yields `Content-Type: application/json`, `Accept: application/json`,
    /// any extra headers from the HTTP settings. When `include_auth` is true
    /// and a token is configured, `Authorization: Bearer <token>` is added.
    pub fn default_headers(&self, include_auth: bool) -> Result<HeaderMap, ClientError> {
        let mut builder = HttpHeaderBuilder::new()
            .with_json_content_type()
            .with_json_accept()
            .with_custom_headers(&self.http.headers)?;
        if include_auth && let Some(token) = &self.bearer_token {
            builder = builder.with_bearer_auth(token.expose_secret())?;
        }
        Ok(builder.build())
    }

    /// Absolute URL for a server-relative endpoint path, by concatenation.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Build the HTTP client from the configured settings.
    pub fn build_http_client(&self) -> Result<reqwest::Client, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.http.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.http.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(proxy) = &self.http.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| ClientError::Configuration(format!("Invalid proxy '{proxy}': {e}")))?;
            builder = builder.proxy(proxy);
        }
        if let Some(user_agent) = &self.http.user_agent {
            builder = builder.user_agent(user_agent);
        }
        builder
            .build()
            .map_err(|e| ClientError::Configuration(format!("Failed to build HTTP client: {e}")))
    }
}
