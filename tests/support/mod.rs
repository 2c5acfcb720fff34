//! Test doubles: recording UI seams and a deterministic transport.
#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::sync::{Arc, Mutex};
use takaful_client::error::ClientError;
use takaful_client::execution::http::transport::{
    HttpTransport, TransportRequest, TransportResponse,
};
use takaful_client::interact::{Navigator, Notifier};

/// One recorded user-visible side effect.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Confirm(String),
    ErrorAlert(String),
    Redirect(String),
}

/// Shared, ordered log of UI events.
#[derive(Debug, Default)]
pub struct UiLog {
    events: Mutex<Vec<UiEvent>>,
}

impl UiLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }
}

/// Notifier that records dialogs. `confirm` yields to the scheduler a few
/// times before recording, so anything racing ahead of dismissal would be
/// observed out of order.
pub struct RecordingNotifier(pub Arc<UiLog>);

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn confirm(&self, message: &str) {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        self.0.push(UiEvent::Confirm(message.to_string()));
    }

    fn alert_error(&self, message: &str) {
        self.0.push(UiEvent::ErrorAlert(message.to_string()));
    }
}

/// Navigator that records redirects.
pub struct RecordingNavigator(pub Arc<UiLog>);

impl Navigator for RecordingNavigator {
    fn redirect(&self, target: &str) {
        self.0.push(UiEvent::Redirect(target.to_string()));
    }
}

/// Deterministic transport returning one fixed response; counts invocations
/// and captures the last observed request.
pub struct StaticTransport {
    status: u16,
    content_type: Option<&'static str>,
    body: &'static str,
    calls: Mutex<u32>,
    last_request: Mutex<Option<TransportRequest>>,
}

impl StaticTransport {
    pub fn json(status: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            status,
            content_type: Some("application/json"),
            body,
            calls: Mutex::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn empty(status: u16) -> Arc<Self> {
        Arc::new(Self {
            status,
            content_type: None,
            body: "",
            calls: Mutex::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.last_request
            .lock()
            .unwrap()
            .clone()
            .expect("transport was never called")
    }
}

#[async_trait]
impl HttpTransport for StaticTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, ClientError> {
        *self.calls.lock().unwrap() += 1;
        *self.last_request.lock().unwrap() = Some(request);
        let mut headers = HeaderMap::new();
        if let Some(content_type) = self.content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        Ok(TransportResponse {
            status: self.status,
            headers,
            body: self.body.as_bytes().to_vec(),
        })
    }
}

/// Transport that always fails at the network level.
pub struct FailingTransport;

#[async_trait]
impl HttpTransport for FailingTransport {
    async fn execute(&self, _request: TransportRequest) -> Result<TransportResponse, ClientError> {
        Err(ClientError::Network("connection refused".into()))
    }
}
