//! # App Search Client
//!
//! This crate provides a client for the App Search HTTP API: engine
//! management, document indexing, search, curations, synonyms, and
//! analytics. It includes definitions for errors, the endpoint catalog, the
//! wire serializer, and an abstract transport interface; the actual HTTP
//! layer is injected by the caller.
//!
//! # Example
//!
//! ```ignore
//! use app_search_client::{AppSearchClient, Page, SearchRequest};
//!
//! let client = AppSearchClient::new(Box::new(transport));
//! client.create_engine("national-parks", Some("en")).await?;
//! let results = client
//!     .search("national-parks", &SearchRequest::new("everglade"))
//!     .await?;
//! ```

pub mod client;
pub mod endpoints;
pub mod errors;
pub mod interfaces;
pub mod serializer;
pub mod types;

pub use client::AppSearchClient;
pub use endpoints::{Endpoint, EndpointSpec, HttpMethod, Operation};
pub use errors::{ClientError, TransportError};
pub use interfaces::{HttpResponse, Transport};
pub use types::{ClickRequest, CurationRequest, Page, SearchRequest};
