//! Error types for the escrow client.
//!
//! This module defines all error types that can occur during client
//! construction and request dispatch. All errors implement the standard
//! [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Configuration Errors** ([`EscrowError::AuthConfig`],
//!   [`EscrowError::Config`]): construction-time failures; no client value
//!   is produced
//! - **API Errors** ([`EscrowError::Api`]): any HTTP response with status
//!   code 400 or above, carrying the decoded error payload
//! - **Transport Errors** ([`EscrowError::Http`]): network failures from
//!   the underlying HTTP layer, propagated unmodified
//! - **Decode Errors** ([`EscrowError::Decode`]): a success response whose
//!   declared JSON content type does not match its body

use thiserror::Error;

use crate::client::Payload;

/// Result type alias for escrow client operations.
///
/// This is a convenience type that uses [`EscrowError`] as the error type.
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, EscrowError>;

/// Errors that can occur when constructing a client or dispatching a request.
///
/// The client performs no retries, no backoff, and no partial-failure
/// recovery: every error is a one-shot signal surfaced immediately to the
/// caller with enough structured detail to branch programmatically.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum EscrowError {
    /// No usable credential form was supplied at construction.
    ///
    /// Raised when none of a custom strategy, (email + API key), or
    /// (email + password) can be resolved. No network call is attempted.
    #[error("authentication not configured: {0}")]
    AuthConfig(String),

    /// Invalid client configuration.
    ///
    /// Raised at construction for an unparseable base URL, an empty API
    /// version segment, or an out-of-range timeout.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The API returned a response with status code 400 or above.
    ///
    /// Carries the status code, the reason phrase (or `"Error"` when the
    /// transport exposes none), and the response payload: decoded JSON if
    /// the body parses, otherwise the raw text. Never retried.
    #[error("[{status}] {reason}")]
    Api {
        /// HTTP status code of the failed response.
        status: u16,
        /// Reason phrase reported by the transport.
        reason: String,
        /// Best-effort decoded response body.
        payload: Payload,
    },

    /// HTTP request failed at the transport level.
    ///
    /// Wraps [`reqwest::Error`]: network timeouts, connection refusals, DNS
    /// resolution failures, TLS errors. Propagated unmodified.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A request body could not be encoded as JSON.
    ///
    /// Raised before any network call is made.
    #[error("failed to encode JSON request body: {0}")]
    Encode(String),

    /// A success response declared JSON but its body failed to parse.
    ///
    /// A 2xx response with `Content-Type: application/json` and a malformed
    /// body is a defect condition; it propagates instead of being silently
    /// returned as text.
    #[error("failed to decode JSON response body: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_display() {
        let error = EscrowError::AuthConfig("no credentials".into());
        assert_eq!(error.to_string(), "authentication not configured: no credentials");
    }

    #[test]
    fn test_api_error_display() {
        let error = EscrowError::Api {
            status: 404,
            reason: "Not Found".to_owned(),
            payload: Payload::Text("missing".to_owned()),
        };
        assert_eq!(error.to_string(), "[404] Not Found");
    }

    #[test]
    fn test_config_error_display() {
        let error = EscrowError::Config("timeout_secs must be between 1 and 300".to_owned());
        assert!(error.to_string().contains("invalid client configuration"));
    }

    #[test]
    fn test_decode_error_display() {
        let error = EscrowError::Decode("expected value at line 1".to_owned());
        assert!(error.to_string().contains("failed to decode JSON"));
    }
}
