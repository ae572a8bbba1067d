//! Resource-scoped convenience methods.
//!
//! Thin pass-through façades over the client dispatcher: each method pins a
//! fixed HTTP verb and path and forwards the normalized result unchanged.
//! Façades borrow the client and hold no state of their own.

pub mod customers;
pub mod transactions;
pub mod webhooks;

pub use customers::CustomersResource;
pub use transactions::TransactionsResource;
pub use webhooks::WebhooksResource;
