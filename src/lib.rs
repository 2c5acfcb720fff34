//! # Takaful Client - REST client layer for the Takaful backend
//!
//! This crate is the API layer of the Takaful charity-management
//! application: registration and management of needy beneficiaries,
//! administrators and group administrators. Screens describe one call with
//! a [`RequestOptions`](types::request::RequestOptions) value; the
//! [`RequestExecutor`](execution::executor::RequestExecutor) performs the
//! call and normalizes every outcome into an
//! [`ApiOutcome`](types::outcome::ApiOutcome), so call sites supply intent,
//! not mechanism.
//!
//! ## Features
//!
//! - **Declarative calls**: endpoint, method, body, headers and user
//!   feedback are a single options value with sensible defaults.
//! - **Uniform outcomes**: success and failure collapse into one result
//!   shape; the executor never panics or leaks errors past its boundary.
//! - **Injected UI seams**: confirmation dialogs, error alerts and
//!   navigation run through the narrow [`interact`] traits, keeping the
//!   executor independent of any UI runtime.
//! - **Injectable transport**: tests and headless hosts can replace the
//!   HTTP layer with a deterministic
//!   [`HttpTransport`](execution::http::transport::HttpTransport).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use takaful_client::prelude::*;
//!
//! # async fn demo() -> Result<(), ClientError> {
//! let config = ClientConfig::new("https://api.takaful.example")
//!     .with_bearer_token("session-token");
//! let executor = RequestExecutor::builder(config).build()?;
//! let service = ApiService::new(executor);
//!
//! let outcome = service.login("amal", "s3cret").await;
//! if outcome.success {
//!     let role = outcome.data.as_ref().and_then(takaful_client::service::extract::user_role);
//!     println!("logged in as {role:?}");
//! }
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod endpoints;
pub mod error;
pub mod execution;
pub mod interact;
pub mod service;
pub mod types;

pub use config::ClientConfig;
pub use error::ClientError;
pub use execution::executor::{RequestExecutor, RequestExecutorBuilder};
pub use types::outcome::ApiOutcome;
pub use types::request::{RequestBody, RequestOptions};

/// Commonly used items.
pub mod prelude {
    pub use crate::config::ClientConfig;
    pub use crate::endpoints;
    pub use crate::error::ClientError;
    pub use crate::execution::executor::{RequestExecutor, RequestExecutorBuilder};
    pub use crate::execution::http::transport::{
        HttpTransport, TransportRequest, TransportResponse,
    };
    pub use crate::interact::{Navigator, Notifier};
    pub use crate::service::{ApiService, Feedback};
    pub use crate::types::http::HttpConfig;
    pub use crate::types::outcome::ApiOutcome;
    pub use crate::types::request::{RequestBody, RequestOptions};
    pub use reqwest::Method;
}
