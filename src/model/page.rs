//! The paginated result envelope returned by list operations.

use serde::{Deserialize, Serialize};

/// One page of list results.
///
/// Navigation links are absent on boundary pages: the first page has no
/// `prev`, the last page has no `next`.
///
/// # Example
///
/// ```rust
/// use global_catalog::model::Page;
///
/// let page: Page<serde_json::Value> = serde_json::from_str(r#"{
///     "offset": 0, "limit": 2, "count": 5, "resource_count": 2,
///     "first": "https://example.com/api/v1?_offset=0&_limit=2",
///     "next": "https://example.com/api/v1?_offset=2&_limit=2",
///     "resources": [{"id": "a"}, {"id": "b"}]
/// }"#).unwrap();
///
/// assert!(page.has_next_page());
/// assert!(!page.has_prev_page());
/// assert_eq!(page.next_offset(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Index of the first resource on this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Maximum number of resources per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Total number of matching resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    /// Number of resources on this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_count: Option<i64>,
    /// Link to the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// Link to the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    /// Link to the previous page.
    #[serde(default, alias = "previous", skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// Link to the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// The resources on this page, in order.
    #[serde(default = "Vec::new")]
    pub resources: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            offset: None,
            limit: None,
            count: None,
            resource_count: None,
            first: None,
            last: None,
            prev: None,
            next: None,
            resources: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if there is a previous page of results.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.prev.is_some()
    }

    /// Returns the offset to request for the next page.
    #[must_use]
    pub fn next_offset(&self) -> Option<i64> {
        self.next.as_deref().and_then(extract_offset)
    }

    /// Returns the offset to request for the previous page.
    #[must_use]
    pub fn prev_offset(&self) -> Option<i64> {
        self.prev.as_deref().and_then(extract_offset)
    }
}

/// Extracts the `_offset` (or `offset`) query value from a link.
fn extract_offset(url: &str) -> Option<i64> {
    let query_start = url.find('?')?;
    let query = &url[query_start + 1..];
    let query = query.split('#').next().unwrap_or(query);

    for param in query.split('&') {
        let mut parts = param.splitn(2, '=');
        if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
            if key == "_offset" || key == "offset" {
                return value.parse().ok();
            }
        }
    }

    None
}
