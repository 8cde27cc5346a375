//! Interface definitions for the HTTP transport collaborator.
//!
//! This module defines the abstract `Transport` trait that allows for
//! dependency injection and swappable HTTP implementations.

mod transport;

pub use transport::{HttpResponse, Transport};
