//! Current search query.

use std::sync::Mutex;

/// Single-value holder for the current search query.
///
/// Default empty, settable, readable. No debouncing, no history, no
/// validation. One logical writer (the search box); a poisoned lock is
/// recovered rather than propagated since the stored string stays intact.
#[derive(Debug, Default)]
pub struct SearchQueryStore {
    query: Mutex<String>,
}

impl SearchQueryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, query: impl Into<String>) {
        let mut guard = self.query.lock().unwrap_or_else(|e| e.into_inner());
        *guard = query.into();
    }

    pub fn get(&self) -> String {
        self.query
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Resolve the effective query for the search route.
    ///
    /// A non-empty literal URL parameter wins; otherwise the stored query is
    /// used. An empty `query=` parameter counts as absent.
    pub fn effective_query(&self, url_param: Option<&str>) -> String {
        match url_param {
            Some(param) if !param.is_empty() => param.to_string(),
            _ => self.get(),
        }
    }
}

/// Extract the URL-decoded `query` parameter from an address-bar query
/// string, tolerating a leading `?`.
pub fn query_param(raw: &str) -> Option<String> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    url::form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_empty_string() {
        let store = SearchQueryStore::new();
        assert_eq!(store.get(), "");
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = SearchQueryStore::new();
        store.set("phone");
        assert_eq!(store.get(), "phone");

        store.set("watch");
        assert_eq!(store.get(), "watch");
    }

    #[test]
    fn url_parameter_wins_over_the_stored_query() {
        let store = SearchQueryStore::new();
        store.set("phone");

        let param = query_param("?query=shirt");
        assert_eq!(store.effective_query(param.as_deref()), "shirt");
    }

    #[test]
    fn missing_parameter_falls_back_to_the_stored_query() {
        let store = SearchQueryStore::new();
        store.set("phone");

        assert_eq!(store.effective_query(None), "phone");
    }

    #[test]
    fn empty_parameter_counts_as_absent() {
        let store = SearchQueryStore::new();
        store.set("phone");

        let param = query_param("?query=");
        assert_eq!(param.as_deref(), Some(""));
        assert_eq!(store.effective_query(param.as_deref()), "phone");
    }

    #[test]
    fn query_param_url_decodes() {
        assert_eq!(
            query_param("query=blue%20shirt").as_deref(),
            Some("blue shirt")
        );
        assert_eq!(query_param("?query=a%2Bb").as_deref(), Some("a+b"));
    }

    #[test]
    fn query_param_ignores_other_keys() {
        assert_eq!(query_param("?page=2&sort=asc"), None);
        assert_eq!(query_param("?page=2&query=mug").as_deref(), Some("mug"));
    }
}
