//! `shopfront-checkout` — the checkout form collaborator.
//!
//! Two required fields, two fixed error messages, and a caller-supplied
//! completion callback. No payment, order creation, or confirmation state
//! is modeled here; what happens after a successful submit belongs to the
//! caller (typically: clear the cart and navigate home).

pub mod form;

pub use form::{CheckoutError, CheckoutForm};
