//! Transaction endpoints.

use reqwest::Method;
use serde_json::{Value, json};

use crate::client::{EscrowClient, Payload};
use crate::error::Result;

/// Transaction endpoints, scoped to a borrowed client.
///
/// All methods dispatch relative calls against the versioned base path,
/// except [`agree`](Self::agree), which targets a host-level action endpoint
/// outside the versioned namespace.
#[derive(Debug)]
pub struct TransactionsResource<'a> {
    client: &'a EscrowClient,
}

impl<'a> TransactionsResource<'a> {
    pub(crate) fn new(client: &'a EscrowClient) -> Self {
        Self { client }
    }

    /// `POST /{version}/transaction` — creates a transaction.
    ///
    /// # Errors
    ///
    /// See [`crate::EscrowError`].
    pub fn create(&self, body: &Value) -> Result<Payload> {
        self.client.request(Method::POST, "/transaction", &[], Some(body))
    }

    /// `GET /{version}/transaction/{id}` — fetches a transaction.
    ///
    /// # Errors
    ///
    /// See [`crate::EscrowError`].
    pub fn get(&self, transaction_id: u64) -> Result<Payload> {
        self.client.request(
            Method::GET,
            &format!("/transaction/{transaction_id}"),
            &[],
            None::<&Value>,
        )
    }

    /// `GET /{version}/transaction?page=..&page_size=..` — lists transactions.
    ///
    /// # Errors
    ///
    /// See [`crate::EscrowError`].
    pub fn list(&self, page: u32, page_size: u32) -> Result<Payload> {
        let page = page.to_string();
        let page_size = page_size.to_string();
        self.client.request(
            Method::GET,
            "/transaction",
            &[("page", page.as_str()), ("page_size", page_size.as_str())],
            None::<&Value>,
        )
    }

    /// `POST /api/TransactionAction/agree` — marks agreement for the current
    /// party.
    ///
    /// Absolute call on the host: the version segment is bypassed. The body
    /// carries the transaction id as an integer.
    ///
    /// # Errors
    ///
    /// See [`crate::EscrowError`].
    pub fn agree(&self, transaction_id: u64) -> Result<Payload> {
        let body = json!({ "transaction_id": transaction_id });
        self.client.request_abs(Method::POST, "/api/TransactionAction/agree", &[], Some(&body))
    }

    /// `POST /{version}/transaction/{id}/payment_methods/{method}` — requests
    /// a payment link for the given payment method.
    ///
    /// # Errors
    ///
    /// See [`crate::EscrowError`].
    pub fn payment_link(&self, transaction_id: u64, payment_method: &str) -> Result<Payload> {
        self.client.request(
            Method::POST,
            &format!("/transaction/{transaction_id}/payment_methods/{payment_method}"),
            &[],
            None::<&Value>,
        )
    }

    /// `GET /{version}/transaction/{id}/web_link/{action}` — fetches a hosted
    /// web link for the given action.
    ///
    /// # Errors
    ///
    /// See [`crate::EscrowError`].
    pub fn web_link(&self, transaction_id: u64, action: &str) -> Result<Payload> {
        self.client.request(
            Method::GET,
            &format!("/transaction/{transaction_id}/web_link/{action}"),
            &[],
            None::<&Value>,
        )
    }
}
