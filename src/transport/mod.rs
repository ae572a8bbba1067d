//! HTTP transport abstraction.
//!
//! The transport layer separates protocol mechanics from request routing:
//! the client resolves URLs, headers, and bodies into a plain-data
//! [`TransportRequest`], and a [`Transport`] implementation executes it and
//! returns a plain-data [`TransportResponse`]. The default implementation is
//! [`HttpTransport`]; tests and callers may inject any other implementation
//! at client construction.

use reqwest::Method;
use url::Url;

use crate::error::Result;

pub mod http;

pub use http::HttpTransport;

/// A fully resolved HTTP request described as plain data.
///
/// Built by the client dispatcher. The URL already carries the query string;
/// headers are complete, including `Authorization`.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: Method,
    /// Fully resolved target URL, query string included.
    pub url: Url,
    /// Complete request headers.
    pub headers: Vec<(String, String)>,
    /// JSON-encoded request body, omitted entirely when not supplied.
    pub body: Option<Vec<u8>>,
}

/// Response from a transport execution.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Reason phrase, when the transport exposes one.
    pub reason: Option<String>,
    /// Response headers.
    pub headers: Vec<(String, String)>,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns the `Content-Type` header value, if present.
    ///
    /// Header name matching is case-insensitive.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }
}

/// Executes fully resolved HTTP requests.
///
/// Implementations hold no per-request mutable state; a single transport may
/// be invoked concurrently from multiple threads. The trait is deliberately
/// open so tests can substitute a recording double for the network.
pub trait Transport: Send + Sync {
    /// Executes the request, blocking until the response is fully received
    /// or the transport times out.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EscrowError::Http`] for network-level failures (DNS,
    /// connect, timeout). HTTP error statuses are NOT errors at this layer;
    /// they are returned as responses and normalized by the client.
    fn execute(&self, request: TransportRequest) -> Result<TransportResponse>;
}
