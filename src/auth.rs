//! Pluggable authentication strategies.
//!
//! Every request the client sends carries an `Authorization` header produced
//! by an [`AuthStrategy`]. Two built-in strategies cover the credential forms
//! the API accepts (API key or account password, both over HTTP Basic), and
//! callers can supply any custom type implementing the trait.
//!
//! # Selection Precedence
//!
//! At client construction, exactly one strategy is selected in this order:
//!
//! 1. An explicit custom strategy, if supplied
//! 2. [`KeyAuth`], if both email and API key are present
//! 3. [`PasswordAuth`], if both email and password are present
//! 4. Otherwise construction fails with [`EscrowError::AuthConfig`]
//!
//! Callers supplying multiple credential forms get this deterministic,
//! documented selection, not a silent override.

use std::fmt::Debug;
use std::sync::Arc;

use base64::Engine as _;

use crate::error::{EscrowError, Result};

/// Produces an `Authorization` header value for outgoing requests.
///
/// Implementations attach authentication and nothing else: the request body,
/// method, and remaining headers are never touched. Strategies are immutable
/// once constructed and are owned by the client that created them.
pub trait AuthStrategy: Send + Sync + Debug {
    /// Returns the `Authorization` header value to attach to a request.
    fn authorization(&self) -> &str;
}

/// API-key authentication using HTTP Basic (email as username, key as password).
///
/// The header value is `"Basic " + base64(email + ":" + api_key)`, computed
/// once at construction. Encoding is deterministic and never fails.
#[derive(Clone)]
pub struct KeyAuth {
    header: String,
}

impl KeyAuth {
    /// Creates a key-based strategy from an account email and API key.
    #[must_use]
    pub fn new(email: &str, api_key: &str) -> Self {
        Self { header: basic_header(email, api_key) }
    }
}

impl AuthStrategy for KeyAuth {
    fn authorization(&self) -> &str {
        &self.header
    }
}

impl Debug for KeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Credentials are recoverable from the header value; keep it out of logs.
        f.debug_struct("KeyAuth").finish_non_exhaustive()
    }
}

/// Password authentication using HTTP Basic.
///
/// Same encoding scheme as [`KeyAuth`] with the account password as the
/// secret. The header value is precomputed and reused for every request.
#[derive(Clone)]
pub struct PasswordAuth {
    header: String,
}

impl PasswordAuth {
    /// Creates a password-based strategy from an account email and password.
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self { header: basic_header(email, password) }
    }
}

impl AuthStrategy for PasswordAuth {
    fn authorization(&self) -> &str {
        &self.header
    }
}

impl Debug for PasswordAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordAuth").finish_non_exhaustive()
    }
}

/// Encodes `email:secret` as an HTTP Basic `Authorization` header value.
fn basic_header(email: &str, secret: &str) -> String {
    let token =
        base64::engine::general_purpose::STANDARD.encode(format!("{email}:{secret}").as_bytes());
    format!("Basic {token}")
}

/// Resolves the authentication strategy from the supplied credential forms.
///
/// Empty strings count as absent credentials.
///
/// # Errors
///
/// Returns [`EscrowError::AuthConfig`] when no precedence tier is satisfied.
/// No network call is attempted.
pub(crate) fn resolve(
    custom: Option<Arc<dyn AuthStrategy>>,
    email: Option<&str>,
    api_key: Option<&str>,
    password: Option<&str>,
) -> Result<Arc<dyn AuthStrategy>> {
    fn present(value: Option<&str>) -> Option<&str> {
        value.filter(|v| !v.is_empty())
    }

    if let Some(strategy) = custom {
        return Ok(strategy);
    }

    match (present(email), present(api_key), present(password)) {
        (Some(email), Some(api_key), _) => Ok(Arc::new(KeyAuth::new(email, api_key))),
        (Some(email), None, Some(password)) => Ok(Arc::new(PasswordAuth::new(email, password))),
        _ => Err(EscrowError::AuthConfig(
            "provide either (email + api_key) or (email + password) or a custom strategy"
                .to_owned(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;

    use super::*;

    #[test]
    fn test_key_auth_header_encoding() {
        let auth = KeyAuth::new("user@example.com", "secret-key");
        let expected = base64::engine::general_purpose::STANDARD.encode("user@example.com:secret-key");
        assert_eq!(auth.authorization(), format!("Basic {expected}"));
    }

    #[test]
    fn test_password_auth_header_encoding() {
        let auth = PasswordAuth::new("user@example.com", "hunter2");
        let expected = base64::engine::general_purpose::STANDARD.encode("user@example.com:hunter2");
        assert_eq!(auth.authorization(), format!("Basic {expected}"));
    }

    #[test]
    fn test_key_auth_deterministic() {
        let first = KeyAuth::new("a@b.c", "k");
        let second = KeyAuth::new("a@b.c", "k");
        assert_eq!(first.authorization(), second.authorization());
    }

    #[test]
    fn test_resolve_prefers_api_key_over_password() {
        let strategy =
            resolve(None, Some("a@b.c"), Some("key"), Some("password")).unwrap();
        assert_eq!(strategy.authorization(), KeyAuth::new("a@b.c", "key").authorization());
    }

    #[test]
    fn test_resolve_falls_back_to_password() {
        let strategy = resolve(None, Some("a@b.c"), None, Some("pw")).unwrap();
        assert_eq!(strategy.authorization(), PasswordAuth::new("a@b.c", "pw").authorization());
    }

    #[test]
    fn test_resolve_custom_takes_precedence() {
        #[derive(Debug)]
        struct Fixed;
        impl AuthStrategy for Fixed {
            fn authorization(&self) -> &str {
                "Bearer fixed-token"
            }
        }

        let strategy =
            resolve(Some(Arc::new(Fixed)), Some("a@b.c"), Some("key"), None).unwrap();
        assert_eq!(strategy.authorization(), "Bearer fixed-token");
    }

    #[test]
    fn test_resolve_fails_without_credentials() {
        let result = resolve(None, None, None, None);
        assert!(matches!(result, Err(EscrowError::AuthConfig(_))));
    }

    #[test]
    fn test_resolve_fails_with_partial_credentials() {
        assert!(resolve(None, Some("a@b.c"), None, None).is_err());
        assert!(resolve(None, None, Some("key"), None).is_err());
        assert!(resolve(None, None, None, Some("pw")).is_err());
    }

    #[test]
    fn test_resolve_treats_empty_strings_as_absent() {
        let result = resolve(None, Some(""), Some("key"), None);
        assert!(matches!(result, Err(EscrowError::AuthConfig(_))));
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let auth = KeyAuth::new("user@example.com", "secret-key");
        let debug = format!("{auth:?}");
        assert!(!debug.contains("secret-key"));
        assert!(!debug.contains(auth.authorization()));
    }
}
