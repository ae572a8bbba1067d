//! Default HTTP transport over a blocking reqwest client.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::instrument;

use crate::error::Result;
use crate::transport::{Transport, TransportRequest, TransportResponse};

/// Blocking HTTP transport.
///
/// Owns the underlying connection pool. The timeout is fixed at
/// construction and applied uniformly to every call; there is no per-call
/// override and no cancellation. Dropping the transport releases the pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    fn execute(&self, request: TransportRequest) -> Result<TransportResponse> {
        let mut builder = self.client.request(request.method, request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;

        let status = response.status();
        let reason = status.canonical_reason().map(ToOwned::to_owned);
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (name.to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned())
            })
            .collect();
        let body = response.bytes()?.to_vec();

        Ok(TransportResponse { status: status.as_u16(), reason, headers, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_transport_construction() {
        let transport = HttpTransport::new(Duration::from_secs(30));
        assert!(transport.is_ok());
    }

    #[test]
    fn test_http_transport_clone_shares_pool() {
        let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();
        let _clone = transport.clone();
    }
}
