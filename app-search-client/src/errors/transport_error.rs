//! Transport error type.

use thiserror::Error;

/// Opaque failure surfaced by a [`Transport`](crate::interfaces::Transport)
/// implementation.
///
/// Covers network failures, timeouts, and HTTP-status failures alike. The
/// client propagates these unchanged and performs no local retry.
#[derive(Debug, Clone, Error)]
#[error("Transport error: {message}")]
pub struct TransportError {
    /// Human-readable description of the failure.
    pub message: String,
    /// HTTP status code, when the failure carries one.
    pub status: Option<u16>,
}

impl TransportError {
    /// Create a transport error with no associated HTTP status.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Create a transport error for a failed HTTP status.
    pub fn with_status(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }
}
