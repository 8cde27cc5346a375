//! Error types for the App Search client.

mod client_error;
mod transport_error;

pub use client_error::ClientError;
pub use transport_error::TransportError;
