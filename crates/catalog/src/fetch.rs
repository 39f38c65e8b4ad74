//! Consumer-facing fetch lifecycle.

use crate::client::CatalogError;
use crate::product::Product;

/// The message consumers display when the catalog fetch fails. Static and
/// non-actionable; the fetch is never retried.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch products.";

/// Mutually exclusive states of the one-shot catalog fetch.
///
/// A consumer starts in `Loading` and transitions exactly once, to `Ready`
/// or `Failed`. There are no intermediate states and no re-fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Failed,
    Ready(Vec<Product>),
}

impl FetchState {
    /// The single atomic transition out of `Loading`.
    pub fn resolve(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(products) => FetchState::Ready(products),
            Err(err) => {
                tracing::warn!(error = %err, "catalog fetch failed");
                FetchState::Failed
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The fixed failure message, present only in the failed state.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            FetchState::Failed => Some(FETCH_ERROR_MESSAGE),
            _ => None,
        }
    }

    pub fn products(&self) -> Option<&[Product]> {
        match self {
            FetchState::Ready(products) => Some(products),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CatalogSource;
    use crate::product::ProductId;
    use async_trait::async_trait;

    fn product(id: u64) -> Product {
        Product {
            id: ProductId(id),
            title: format!("product {id}"),
            price: "10.00".parse().unwrap(),
            category: "misc".to_string(),
            description: String::new(),
            image: String::new(),
        }
    }

    struct StubCatalog {
        outcome: Result<Vec<Product>, CatalogError>,
    }

    #[async_trait]
    impl CatalogSource for StubCatalog {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
            match &self.outcome {
                Ok(products) => Ok(products.clone()),
                Err(CatalogError::Network(msg)) => Err(CatalogError::Network(msg.clone())),
                Err(CatalogError::Api(status, body)) => {
                    Err(CatalogError::Api(*status, body.clone()))
                }
                Err(CatalogError::Parse(msg)) => Err(CatalogError::Parse(msg.clone())),
            }
        }
    }

    #[test]
    fn resolve_success_yields_ready_with_data() {
        let state = FetchState::resolve(Ok(vec![product(1), product(2)]));
        assert_eq!(state.products().map(<[Product]>::len), Some(2));
        assert!(state.error_message().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn resolve_failure_yields_the_fixed_message() {
        let state = FetchState::resolve(Err(CatalogError::Network("timed out".into())));
        assert_eq!(state, FetchState::Failed);
        assert_eq!(state.error_message(), Some(FETCH_ERROR_MESSAGE));
        assert!(state.products().is_none());
    }

    #[test]
    fn loading_exposes_neither_data_nor_error() {
        let state = FetchState::Loading;
        assert!(state.is_loading());
        assert!(state.products().is_none());
        assert!(state.error_message().is_none());
    }

    #[tokio::test]
    async fn fetch_resolves_once_through_the_source_seam() {
        let source = StubCatalog {
            outcome: Ok(vec![product(7)]),
        };

        let state = FetchState::resolve(source.fetch_products().await);
        let products = state.products().unwrap();
        assert_eq!(products[0].id, ProductId(7));
    }

    #[tokio::test]
    async fn fetch_failure_resolves_to_failed() {
        let source = StubCatalog {
            outcome: Err(CatalogError::Api(500, "boom".into())),
        };

        let state = FetchState::resolve(source.fetch_products().await);
        assert_eq!(state, FetchState::Failed);
    }
}
