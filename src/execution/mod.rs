//! Request execution pipeline.

pub mod decode;
pub mod executor;
pub mod failure;
pub mod http;

pub use executor::{RequestExecutor, RequestExecutorBuilder};
