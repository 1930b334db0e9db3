//! Outgoing Query Builder
//!
//! Keeps parameter order stable. Named filters are always forwarded, as an
//! empty value when the browser left them out, so the backend sees the same
//! query shape on every call.

use kernel::pagination::PageParams;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardQuery {
    pairs: Vec<(&'static str, String)>,
}

impl ForwardQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// `page` then `limit`
    pub fn page(mut self, params: PageParams) -> Self {
        self.pairs.push(("page", params.page.to_string()));
        self.pairs.push(("limit", params.limit.to_string()));
        self
    }

    /// Named filter, forwarded as `key=` when absent
    pub fn filter(mut self, key: &'static str, value: Option<&str>) -> Self {
        self.pairs.push((key, value.unwrap_or_default().to_string()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Borrowed pairs in the shape `BackendApi::get` takes
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_and_empty_filter() {
        let query = ForwardQuery::new()
            .page(PageParams { page: 2, limit: 5 })
            .filter("parentCategoryName", Some("crypto"))
            .filter("subCategoryName", None);

        assert_eq!(
            query.pairs(),
            vec![
                ("page", "2"),
                ("limit", "5"),
                ("parentCategoryName", "crypto"),
                ("subCategoryName", ""),
            ]
        );
        assert_eq!(query.get("subCategoryName"), Some(""));
        assert_eq!(query.get("missing"), None);
    }

    #[test]
    fn test_default_page() {
        let query = ForwardQuery::new().page(PageParams::default());
        assert_eq!(query.get("page"), Some("1"));
        assert_eq!(query.get("limit"), Some("10"));
    }
}
