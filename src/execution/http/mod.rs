//! HTTP-level building blocks: header assembly and the transport seam.

pub mod headers;
pub mod transport;
