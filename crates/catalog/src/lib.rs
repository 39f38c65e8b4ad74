//! `shopfront-catalog` — product model and the remote catalog collaborator.
//!
//! The catalog is an external service: a fetch either yields the full
//! product list or fails with a generic condition. Consumers render exactly
//! one of three states (loading, failed, ready); there is no retry, no
//! caching, no pagination.

pub mod client;
pub mod fetch;
pub mod product;

pub use client::{CatalogClient, CatalogError, CatalogSource};
pub use fetch::{FETCH_ERROR_MESSAGE, FetchState};
pub use product::{Product, ProductId, featured_order};
