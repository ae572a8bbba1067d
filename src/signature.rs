//! Webhook signature verification using HMAC-SHA256.
//!
//! Webhook verification is a security boundary: the digest comparison is
//! constant-time in secret-dependent data to avoid timing side channels.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Verifies a webhook signature against the raw request body.
///
/// Computes HMAC-SHA256 over `raw_body` keyed by `secret`, rendered as
/// lowercase hex, and compares it against the supplied signature as a whole
/// string. The signature is normalized first: lowercased, then stripped of a
/// single optional `sha256=` prefix, so both raw-hex and prefixed header
/// formats are accepted regardless of case.
///
/// Pure function: no I/O, no cached state. The secret is caller-managed and
/// never retained.
///
/// # Examples
///
/// ```
/// use escrow_client::verify_signature;
///
/// let body = br#"{"event":"transaction.updated"}"#;
/// assert!(!verify_signature(body, "sha256=deadbeef", "secret"));
/// ```
#[must_use]
pub fn verify_signature(raw_body: &[u8], signature: &str, secret: &str) -> bool {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(raw_body);
    let expected = hex::encode(mac.finalize().into_bytes());

    // Lowercase first, then strip the prefix: matches the documented
    // normalization order for prefixed header formats.
    let normalized = signature.to_lowercase();
    let normalized = normalized.strip_prefix("sha256=").unwrap_or(&normalized);

    let matched = constant_time_eq(expected.as_bytes(), normalized.as_bytes());
    if !matched {
        warn!("webhook signature verification failed");
    }
    matched
}

/// Constant-time byte-slice comparison behind a length gate.
///
/// Length is not secret-dependent here: the expected digest length is fixed
/// by the algorithm.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
