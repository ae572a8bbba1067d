//! Customer endpoints.

use reqwest::Method;
use serde_json::Value;

use crate::client::{EscrowClient, Payload};
use crate::error::Result;

/// Customer endpoints, scoped to a borrowed client.
#[derive(Debug)]
pub struct CustomersResource<'a> {
    client: &'a EscrowClient,
}

impl<'a> CustomersResource<'a> {
    pub(crate) fn new(client: &'a EscrowClient) -> Self {
        Self { client }
    }

    /// `GET /{version}/customer/me` — the authenticated customer.
    ///
    /// # Errors
    ///
    /// See [`crate::EscrowError`].
    pub fn me(&self) -> Result<Payload> {
        self.client.request(Method::GET, "/customer/me", &[], None::<&Value>)
    }

    /// `GET /{version}/customer/{id}` — a customer by id (or `"me"`).
    ///
    /// # Errors
    ///
    /// See [`crate::EscrowError`].
    pub fn get(&self, customer_id: &str) -> Result<Payload> {
        self.client.request(
            Method::GET,
            &format!("/customer/{customer_id}"),
            &[],
            None::<&Value>,
        )
    }

    /// `GET /{version}/customer/{id}/api_key` — API keys for a customer.
    ///
    /// # Errors
    ///
    /// See [`crate::EscrowError`].
    pub fn api_keys(&self, customer_id: &str) -> Result<Payload> {
        self.client.request(
            Method::GET,
            &format!("/customer/{customer_id}/api_key"),
            &[],
            None::<&Value>,
        )
    }
}
