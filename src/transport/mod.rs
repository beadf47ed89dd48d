//! HTTP transport abstraction
//!
//! The provider issues exactly one GET request per lookup through the
//! [`Transport`] trait, so callers can configure the real client (timeouts,
//! proxies) and tests can substitute canned responses.

pub mod http;

use crate::error::Result;

/// Trait for the HTTP transport used by the provider
///
/// Implementations must be thread-safe (Send + Sync); the provider itself
/// holds no mutable state and is shared freely across threads.
pub trait Transport: Send + Sync {
    /// Issue a GET request and return the full response body
    fn send(&self, url: &str) -> Result<String>;
}
