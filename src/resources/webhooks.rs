//! Webhook helpers.

use crate::client::EscrowClient;
use crate::signature;

/// Webhook helpers, scoped to a borrowed client.
///
/// The client holds no persisted webhook state; the signing secret is
/// supplied by the caller per verification call.
#[derive(Debug)]
pub struct WebhooksResource<'a> {
    #[allow(dead_code, reason = "verification is pure; the borrow keeps facade scoping uniform")]
    client: &'a EscrowClient,
}

impl<'a> WebhooksResource<'a> {
    pub(crate) fn new(client: &'a EscrowClient) -> Self {
        Self { client }
    }

    /// Verifies a webhook signature against the raw request body.
    ///
    /// See [`crate::verify_signature`] for the normalization and comparison
    /// contract.
    #[must_use]
    pub fn verify_signature(&self, raw_body: &[u8], signature: &str, secret: &str) -> bool {
        signature::verify_signature(raw_body, signature, secret)
    }
}
