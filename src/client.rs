//! Escrow API client: construction, dual-mode dispatch, and response
//! normalization.
//!
//! [`EscrowClient`] owns the authentication strategy, the routing
//! configuration, and the transport. It exposes two call modes with
//! identical post-processing but different URL construction:
//!
//! - [`EscrowClient::request`]: relative call, `base_path + path`, used for
//!   all versioned-API endpoints
//! - [`EscrowClient::request_abs`]: absolute call, `api_base + path`,
//!   bypassing the version segment for host-level action endpoints
//!
//! Both funnel through one internal send-and-normalize routine so the
//! status-code and content-type handling cannot drift apart.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::auth::{self, AuthStrategy};
use crate::config::ClientConfig;
use crate::error::{EscrowError, Result};
use crate::resources::{CustomersResource, TransactionsResource, WebhooksResource};
use crate::transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

/// A normalized response payload.
///
/// Responses whose declared `Content-Type` starts with `application/json`
/// are decoded into [`Payload::Json`]; everything else is returned as the
/// raw text body unmodified. A fresh value is produced per call.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Decoded JSON document.
    Json(Value),
    /// Raw text body.
    Text(String),
}

impl Payload {
    /// Returns the decoded JSON document, if this payload is JSON.
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Returns the raw text body, if this payload is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Builder for [`EscrowClient`].
///
/// Mirrors the API's construction parameters: routing configuration,
/// credential strings, an optional custom auth strategy, and an optional
/// injected transport. Credential selection follows the precedence
/// documented in [`crate::auth`].
#[derive(Default)]
pub struct EscrowClientBuilder {
    config: ClientConfig,
    email: Option<String>,
    api_key: Option<String>,
    password: Option<String>,
    auth: Option<Arc<dyn AuthStrategy>>,
    transport: Option<Box<dyn Transport>>,
}

impl std::fmt::Debug for EscrowClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EscrowClientBuilder")
            .field("config", &self.config)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl EscrowClientBuilder {
    /// Replaces the whole routing configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.config.api_base = api_base.into();
        self
    }

    /// Sets the API version path segment.
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.config.api_version = api_version.into();
        self
    }

    /// Sets the request timeout in seconds (default 30).
    #[must_use]
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    /// Sets the account email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the API key credential.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the account password credential.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Supplies a custom authentication strategy.
    ///
    /// Takes precedence over any credential strings also supplied.
    #[must_use]
    pub fn auth(mut self, strategy: impl AuthStrategy + 'static) -> Self {
        self.auth = Some(Arc::new(strategy));
        self
    }

    /// Injects a transport, replacing the default HTTP transport.
    ///
    /// Intended for tests; the injected transport owns its own timeout
    /// behavior.
    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Adds a default header, overriding the built-in JSON defaults when the
    /// name collides.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.insert(name.into(), value.into());
        self
    }

    /// Builds the client.
    ///
    /// Validates the configuration, resolves the authentication strategy,
    /// and constructs the transport. No network call is made.
    ///
    /// # Errors
    ///
    /// - [`EscrowError::Config`] for invalid routing configuration
    /// - [`EscrowError::AuthConfig`] when no credential form resolves
    /// - [`EscrowError::Http`] when the default transport cannot be built
    pub fn build(self) -> Result<EscrowClient> {
        self.config.validate()?;

        let auth = auth::resolve(
            self.auth,
            self.email.as_deref(),
            self.api_key.as_deref(),
            self.password.as_deref(),
        )?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new(self.config.timeout())?),
        };

        let base_path = self.config.base_path();
        let default_headers = merge_headers(&self.config);

        Ok(EscrowClient { config: self.config, base_path, auth, transport, default_headers })
    }
}

/// Merges caller header overrides over the built-in JSON defaults,
/// last-write-wins with case-insensitive name matching.
fn merge_headers(config: &ClientConfig) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = vec![
        ("Accept".to_owned(), "application/json".to_owned()),
        ("Content-Type".to_owned(), "application/json".to_owned()),
    ];
    for (name, value) in &config.headers {
        match headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some(entry) => entry.1 = value.clone(),
            None => headers.push((name.clone(), value.clone())),
        }
    }
    headers
}

/// Synchronous client for the escrow transaction API.
///
/// Holds no per-call mutable state: each call constructs its own request and
/// response locally, so a single instance may be shared across threads. The
/// transport (and its connection pool) is acquired at construction and
/// released when the client is dropped or explicitly [closed](Self::close).
///
/// # Examples
///
/// ```no_run
/// use escrow_client::EscrowClient;
///
/// # fn example() -> escrow_client::Result<()> {
/// let client = EscrowClient::builder()
///     .email("user@example.com")
///     .api_key("key-123")
///     .build()?;
///
/// let me = client.customers().me()?;
/// println!("{:?}", me.as_json());
/// client.close();
/// # Ok(())
/// # }
/// ```
pub struct EscrowClient {
    config: ClientConfig,
    base_path: String,
    auth: Arc<dyn AuthStrategy>,
    transport: Box<dyn Transport>,
    default_headers: Vec<(String, String)>,
}

impl std::fmt::Debug for EscrowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EscrowClient")
            .field("base_path", &self.base_path)
            .field("timeout_secs", &self.config.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl EscrowClient {
    /// Returns a builder with default configuration.
    #[must_use]
    pub fn builder() -> EscrowClientBuilder {
        EscrowClientBuilder::default()
    }

    /// Returns the routing configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Customer endpoints.
    #[must_use]
    pub fn customers(&self) -> CustomersResource<'_> {
        CustomersResource::new(self)
    }

    /// Transaction endpoints.
    #[must_use]
    pub fn transactions(&self) -> TransactionsResource<'_> {
        TransactionsResource::new(self)
    }

    /// Webhook helpers.
    #[must_use]
    pub fn webhooks(&self) -> WebhooksResource<'_> {
        WebhooksResource::new(self)
    }

    /// Dispatches a relative request against the versioned base path.
    ///
    /// Target URL is `{api_base}/{api_version}{path}`. Query pairs are
    /// URL-encoded; the body is JSON-encoded only when supplied.
    ///
    /// # Errors
    ///
    /// See [`EscrowError`]: API statuses ≥ 400 become [`EscrowError::Api`],
    /// transport failures propagate as [`EscrowError::Http`], and malformed
    /// JSON in a success response is [`EscrowError::Decode`].
    #[instrument(skip(self, query, body), fields(path))]
    pub fn request<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&T>,
    ) -> Result<Payload> {
        let url = resolve_url(&self.base_path, path, query)?;
        self.send(method, url, body)
    }

    /// Dispatches an absolute request on the same host.
    ///
    /// Target URL is `{api_base}{absolute_path}`, bypassing the API version
    /// segment entirely. Used for host-level action endpoints such as
    /// `/api/TransactionAction/agree`.
    ///
    /// # Errors
    ///
    /// Same contract as [`EscrowClient::request`].
    #[instrument(skip(self, query, body), fields(absolute_path))]
    pub fn request_abs<T: Serialize>(
        &self,
        method: Method,
        absolute_path: &str,
        query: &[(&str, &str)],
        body: Option<&T>,
    ) -> Result<Payload> {
        let url = resolve_url(self.config.api_base(), absolute_path, query)?;
        self.send(method, url, body)
    }

    /// Releases the transport deterministically.
    ///
    /// Dropping the client has the same effect; this method exists as the
    /// explicit-release path for scoped lifecycles.
    pub fn close(self) {
        drop(self);
    }

    /// Sends one fully resolved request and normalizes the outcome.
    ///
    /// The single normalization path shared by both call modes.
    fn send<T: Serialize>(&self, method: Method, url: Url, body: Option<&T>) -> Result<Payload> {
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| EscrowError::Encode(e.to_string()))?;

        let mut headers = self.default_headers.clone();
        headers.push(("Authorization".to_owned(), self.auth.authorization().to_owned()));

        let response = self.transport.execute(TransportRequest { method, url, headers, body })?;

        normalize(response)
    }
}

/// Builds the target URL from a base, a path, and query pairs.
fn resolve_url(base: &str, path: &str, query: &[(&str, &str)]) -> Result<Url> {
    let mut url = Url::parse(&format!("{base}{path}"))
        .map_err(|e| EscrowError::Config(format!("invalid request URL '{base}{path}': {e}")))?;
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

/// Normalizes a transport response into a payload or an API error.
fn normalize(response: TransportResponse) -> Result<Payload> {
    if response.status >= 400 {
        let payload = match serde_json::from_slice::<Value>(&response.body) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(String::from_utf8_lossy(&response.body).into_owned()),
        };
        let reason = response.reason.unwrap_or_else(|| "Error".to_owned());
        warn!(status = response.status, reason = %reason, "API returned error status");
        return Err(EscrowError::Api { status: response.status, reason, payload });
    }

    let is_json =
        response.content_type().is_some_and(|ct| ct.starts_with("application/json"));

    if is_json {
        let value = serde_json::from_slice(&response.body)
            .map_err(|e| EscrowError::Decode(e.to_string()))?;
        debug!(status = response.status, "decoded JSON response");
        Ok(Payload::Json(value))
    } else {
        Ok(Payload::Text(String::from_utf8_lossy(&response.body).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_payload_accessors() {
        let json = Payload::Json(json!({"ok": true}));
        assert_eq!(json.as_json(), Some(&json!({"ok": true})));
        assert!(json.as_text().is_none());

        let text = Payload::Text("plain".to_owned());
        assert_eq!(text.as_text(), Some("plain"));
        assert!(text.as_json().is_none());
    }

    #[test]
    fn test_merge_headers_defaults() {
        let config = ClientConfig::default();
        let headers = merge_headers(&config);
        assert_eq!(headers.len(), 2);
        assert!(headers.contains(&("Accept".to_owned(), "application/json".to_owned())));
        assert!(headers.contains(&("Content-Type".to_owned(), "application/json".to_owned())));
    }

    #[test]
    fn test_merge_headers_caller_overrides_default() {
        let mut config = ClientConfig::default();
        config.headers.insert("accept".to_owned(), "text/csv".to_owned());
        let headers = merge_headers(&config);
        assert_eq!(headers.len(), 2);
        assert!(headers.iter().any(|(n, v)| n == "Accept" && v == "text/csv"));
    }

    #[test]
    fn test_merge_headers_caller_adds_new() {
        let mut config = ClientConfig::default();
        config.headers.insert("X-Request-Id".to_owned(), "abc".to_owned());
        let headers = merge_headers(&config);
        assert_eq!(headers.len(), 3);
        assert!(headers.contains(&("X-Request-Id".to_owned(), "abc".to_owned())));
    }

    #[test]
    fn test_resolve_url_appends_query() {
        let url = resolve_url(
            "https://api.example.com/2017-09-01",
            "/transaction",
            &[("page", "1"), ("page_size", "20")],
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/2017-09-01/transaction?page=1&page_size=20");
    }

    #[test]
    fn test_resolve_url_no_query() {
        let url = resolve_url("https://api.example.com", "/api/test", &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/test");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_resolve_url_encodes_query_values() {
        let url = resolve_url(
            "https://api.example.com/v1",
            "/search",
            &[("q", "rust & escrow")],
        )
        .unwrap();
        assert!(url.query().unwrap().contains("rust+%26+escrow"));
    }

    #[test]
    fn test_normalize_json_success() {
        let response = TransportResponse {
            status: 200,
            reason: Some("OK".to_owned()),
            headers: vec![("Content-Type".to_owned(), "application/json; charset=utf-8".to_owned())],
            body: br#"{"id": 7}"#.to_vec(),
        };
        let payload = normalize(response).unwrap();
        assert_eq!(payload, Payload::Json(json!({"id": 7})));
    }

    #[test]
    fn test_normalize_text_success() {
        let response = TransportResponse {
            status: 200,
            reason: Some("OK".to_owned()),
            headers: vec![("Content-Type".to_owned(), "text/plain".to_owned())],
            body: b"hello".to_vec(),
        };
        let payload = normalize(response).unwrap();
        assert_eq!(payload, Payload::Text("hello".to_owned()));
    }

    #[test]
    fn test_normalize_missing_content_type_is_text() {
        let response = TransportResponse {
            status: 200,
            reason: None,
            headers: vec![],
            body: br#"{"looks": "like json"}"#.to_vec(),
        };
        // Without a JSON content type the body stays raw text.
        let payload = normalize(response).unwrap();
        assert!(matches!(payload, Payload::Text(_)));
    }

    #[test]
    fn test_normalize_error_with_json_body() {
        let response = TransportResponse {
            status: 404,
            reason: Some("Not Found".to_owned()),
            headers: vec![("Content-Type".to_owned(), "application/json".to_owned())],
            body: br#"{"error":"not_found"}"#.to_vec(),
        };
        let err = normalize(response).unwrap_err();
        let EscrowError::Api { status, reason, payload } = err else {
            panic!("expected Api error");
        };
        assert_eq!(status, 404);
        assert_eq!(reason, "Not Found");
        assert_eq!(payload, Payload::Json(json!({"error": "not_found"})));
    }

    #[test]
    fn test_normalize_error_with_text_body() {
        let response = TransportResponse {
            status: 500,
            reason: Some("Internal Server Error".to_owned()),
            headers: vec![("Content-Type".to_owned(), "text/html".to_owned())],
            body: b"Internal Error".to_vec(),
        };
        let err = normalize(response).unwrap_err();
        let EscrowError::Api { status, payload, .. } = err else {
            panic!("expected Api error");
        };
        assert_eq!(status, 500);
        assert_eq!(payload, Payload::Text("Internal Error".to_owned()));
    }

    #[test]
    fn test_normalize_error_without_reason_uses_placeholder() {
        let response = TransportResponse {
            status: 418,
            reason: None,
            headers: vec![],
            body: vec![],
        };
        let err = normalize(response).unwrap_err();
        let EscrowError::Api { reason, .. } = err else {
            panic!("expected Api error");
        };
        assert_eq!(reason, "Error");
    }

    #[test]
    fn test_normalize_malformed_json_success_is_decode_error() {
        let response = TransportResponse {
            status: 200,
            reason: Some("OK".to_owned()),
            headers: vec![("Content-Type".to_owned(), "application/json".to_owned())],
            body: b"{not json".to_vec(),
        };
        let err = normalize(response).unwrap_err();
        assert!(matches!(err, EscrowError::Decode(_)));
    }
}
