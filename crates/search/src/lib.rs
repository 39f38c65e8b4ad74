//! `shopfront-search` — the search query store and title filtering.
//!
//! The query store is a trivial single-value holder shared by the navbar
//! search box and the search page. The search page may additionally carry a
//! `query` address-bar parameter; a literal, non-empty parameter wins over
//! the stored value.

pub mod filter;
pub mod query;

pub use filter::filter_by_title;
pub use query::{SearchQueryStore, query_param};
