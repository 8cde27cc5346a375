//! Client error types.
//!
//! This module defines the error types that can occur while building or
//! executing an App Search request.

use thiserror::Error;

use crate::errors::TransportError;

/// Errors that can occur during client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The operation name is not part of the endpoint catalog.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// A URI template placeholder has no value in the parameter map.
    #[error("Missing route parameter: {0}")]
    MissingRouteParameter(String),

    /// A URI template placeholder resolved to a non-scalar value.
    #[error("Invalid route parameter value for {0}: expected a string or number")]
    InvalidRouteParameterValue(String),

    /// The response claimed a JSON content type but failed to decode.
    ///
    /// Carries the decoder diagnostic and the raw payload so callers can
    /// inspect what the server actually returned.
    #[error("Malformed JSON response: {reason}")]
    MalformedResponse { reason: String, body: String },

    /// A request body could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The transport failed to complete the request.
    ///
    /// Propagated unchanged. Retry and backoff policy belong to the
    /// transport, not to this client.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ClientError {
    /// Create an unknown operation error.
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    /// Create a missing route parameter error.
    pub fn missing_route_parameter(name: impl Into<String>) -> Self {
        Self::MissingRouteParameter(name.into())
    }

    /// Create an invalid route parameter value error.
    pub fn invalid_route_parameter_value(name: impl Into<String>) -> Self {
        Self::InvalidRouteParameterValue(name.into())
    }

    /// Create a malformed response error from a decoder failure.
    pub fn malformed_response(err: &serde_json::Error, body: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: err.to_string(),
            body: body.into(),
        }
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}
