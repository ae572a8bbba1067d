//! Escrow Client: Typed Access to the Escrow Transaction REST API
//!
//! A synchronous Rust client library for the escrow transaction API. It
//! authenticates requests through a pluggable strategy, dispatches HTTP
//! calls against either a versioned relative path or an absolute path on
//! the same host, normalizes responses and errors, and offers
//! resource-scoped convenience methods (customers, transactions, webhooks).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  Caller          │
//! └────────┬─────────┘
//!          │ customers() / transactions() / webhooks()
//! ┌────────▼─────────────────────────────────────────┐
//! │           EscrowClient (this crate)              │
//! │  ┌──────────────┐      ┌───────────────────┐     │
//! │  │ AuthStrategy │──────│ Dual-mode dispatch│     │
//! │  │ (key, pass,  │      │ (relative vs.     │     │
//! │  │  custom)     │      │  absolute URL)    │     │
//! │  └──────────────┘      └─────────┬─────────┘     │
//! └──────────────────────────────────┼───────────────┘
//!                                    │ Transport (blocking HTTP)
//!                           ┌────────▼────────┐
//!                           │  Escrow API     │
//!                           └─────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use escrow_client::EscrowClient;
//!
//! # fn example() -> escrow_client::Result<()> {
//! let client = EscrowClient::builder()
//!     .email("user@example.com")
//!     .api_key("api-key-123")
//!     .build()?;
//!
//! // Fetch the authenticated customer
//! let me = client.customers().me()?;
//! println!("{:?}", me.as_json());
//!
//! // Create and agree to a transaction
//! let _created = client.transactions().create(&serde_json::json!({
//!     "currency": "usd",
//!     "description": "domain sale",
//! }))?;
//! client.transactions().agree(1234)?;
//!
//! client.close();
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! Credential selection is deterministic: an explicit custom
//! [`AuthStrategy`] wins, then (email + API key), then (email + password).
//! Supplying none of these fails construction with
//! [`EscrowError::AuthConfig`] before any network call. See [`auth`].
//!
//! # Webhook Verification
//!
//! [`verify_signature`] checks an HMAC-SHA256 webhook signature against the
//! raw request body using a constant-time comparison:
//!
//! ```rust
//! use escrow_client::verify_signature;
//!
//! let ok = verify_signature(b"raw body bytes", "sha256=0a1b...", "shared-secret");
//! assert!(!ok);
//! ```
//!
//! # Module Organization
//!
//! - [`client`]: client construction, dual-mode dispatch, normalization
//! - [`auth`]: pluggable authentication strategies
//! - [`config`]: routing configuration with defaults and validation
//! - [`transport`]: injectable blocking HTTP transport
//! - [`resources`]: customer/transaction/webhook façades
//! - [`signature`]: webhook HMAC-SHA256 verification
//! - [`error`]: error taxonomy
//!
//! # Error Handling
//!
//! All operations return [`Result<T, EscrowError>`](Result). API failures
//! carry structured detail for programmatic branching:
//!
//! ```rust,no_run
//! use escrow_client::{EscrowClient, EscrowError};
//!
//! # fn example(client: &EscrowClient) {
//! match client.customers().get("42") {
//!     Ok(payload) => println!("{payload:?}"),
//!     Err(EscrowError::Api { status: 404, payload, .. }) => {
//!         eprintln!("no such customer: {payload:?}");
//!     }
//!     Err(EscrowError::Http(e)) => eprintln!("network failure: {e}"),
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! # }
//! ```
//!
//! The client never retries: every failure is surfaced once to the caller.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod signature;
pub mod transport;

pub use auth::{AuthStrategy, KeyAuth, PasswordAuth};
pub use client::{EscrowClient, EscrowClientBuilder, Payload};
pub use config::ClientConfig;
pub use error::{EscrowError, Result};
pub use signature::verify_signature;
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

// Callers and injected transports speak the same method type.
pub use reqwest::Method;
