//! HTTP transport abstraction.
//!
//! An injectable transport that can observe the final method, URL, headers
//! and body and return a synthetic response without going through `reqwest`.
//! This is the deterministic seam used by headless hosts and tests.
//!
//! Notes:
//! - The abstraction is scoped to non-multipart requests. Multipart forms
//!   carry a transport-owned boundary and always go through the real client.

use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::HeaderMap;

/// Transport-level request data.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    /// Encoded body bytes, when the request carries a body.
    pub body: Option<Vec<u8>>,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Custom HTTP transport.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, ClientError>;
}
