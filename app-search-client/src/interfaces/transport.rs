//! Transport trait definition.
//!
//! The client owns request assembly and response decoding; everything about
//! actually moving bytes (connection pooling, authentication headers, TLS,
//! retry and backoff, timeouts, cancellation) lives behind this trait.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::endpoints::HttpMethod;
use crate::errors::TransportError;

/// A raw HTTP response as surfaced by the transport.
///
/// The body is left undecoded; the client runs it through the serializer
/// using the response headers to decide whether it is JSON.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, lower-cased with underscores (`content_type`).
    pub headers: HashMap<String, String>,
    /// Raw response body.
    pub body: String,
}

/// Abstract interface for executing HTTP requests.
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// across async tasks. Query parameter values may be composite
/// (sequences or mappings); flattening them into the query string is the
/// implementation's encoding convention.
///
/// # Error Handling
///
/// Failures surface as [`TransportError`] and are propagated to the caller
/// unchanged; the client never retries.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a single HTTP request.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method of the request
    /// * `uri` - Fully rendered request path, relative to the service root
    /// * `query` - Whitelisted query parameters, never null-valued
    /// * `body` - Serialized request body, absent when the operation has none
    async fn send(
        &self,
        method: HttpMethod,
        uri: &str,
        query: &Map<String, Value>,
        body: Option<String>,
    ) -> Result<HttpResponse, TransportError>;
}
