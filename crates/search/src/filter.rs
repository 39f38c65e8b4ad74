//! Title filtering for the search page.

use shopfront_catalog::Product;

/// Products whose title contains the query, case-insensitively.
///
/// An empty query matches everything; an empty result is the search page's
/// "no products found" state.
pub fn filter_by_title<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .collect()
}
