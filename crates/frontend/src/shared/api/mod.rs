//! REST plumbing: error taxonomy, transport seam and the JSON client.

pub mod client;
pub mod error;
#[cfg(test)]
pub mod mock;
pub mod transport;

pub use client::ApiClient;
pub use error::ApiError;
pub use transport::{GlooTransport, HttpTransport};
