//! Response wrapper for catalog operations.
//!
//! This module provides [`ResourceResponse<T>`], a wrapper that combines the
//! decoded result of an operation with the raw [`DetailedResponse`] it came
//! from. The wrapper implements `Deref` for ergonomic access to the inner data.
//!
//! # Deref Pattern
//!
//! `ResourceResponse<T>` implements `Deref<Target = T>`, which means you can
//! use it like the inner type directly:
//!
//! ```rust,ignore
//! let page: ResourceResponse<Page<CatalogEntry>> = catalog.list_catalog_entries(None).await?;
//!
//! // Page fields and methods via Deref
//! for entry in &page.resources {
//!     println!("{:?}", entry.name);
//! }
//! if page.has_next_page() {
//!     println!("next offset {:?}", page.next_offset());
//! }
//!
//! // Raw response metadata
//! println!("status {} etag {:?}", page.status(), page.etag());
//! ```

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use crate::clients::DetailedResponse;

/// A decoded result together with its raw response.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use global_catalog::clients::DetailedResponse;
/// use global_catalog::rest::ResourceResponse;
///
/// let raw = DetailedResponse::new(200, HashMap::new(), Vec::new());
/// let response = ResourceResponse::new(vec!["a", "b"], raw);
///
/// // Access items via Deref
/// assert_eq!(response.len(), 2);
/// assert_eq!(response.status(), 200);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    response: DetailedResponse,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse`.
    #[must_use]
    pub const fn new(data: T, response: DetailedResponse) -> Self {
        Self { data, response }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Consumes the response and returns the data and the raw response.
    #[must_use]
    pub fn into_parts(self) -> (T, DetailedResponse) {
        (self.data, self.response)
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner data.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the raw response.
    #[must_use]
    pub const fn response(&self) -> &DetailedResponse {
        &self.response
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.response.status
    }

    /// Returns the response headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.response.headers
    }

    /// Returns the `ETag` header.
    #[must_use]
    pub fn etag(&self) -> Option<&str> {
        self.response.etag()
    }

    /// Maps the inner data to a new type, preserving the raw response.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            response: self.response,
        }
    }
}

/// Provides transparent access to the inner data.
impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Provides mutable access to the inner data.
impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<u8>>>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestEntry {
        id: String,
    }

    fn raw(status: u16) -> DetailedResponse {
        let mut headers = HashMap::new();
        headers.insert("ETag".to_string(), vec!["\"v1\"".to_string()]);
        DetailedResponse::new(status, headers, Vec::new())
    }

    #[test]
    fn test_deref_allows_field_access() {
        let response = ResourceResponse::new(
            TestEntry {
                id: "svc".to_string(),
            },
            raw(200),
        );

        assert_eq!(response.id, "svc");
    }

    #[test]
    fn test_deref_mut_allows_mutable_access() {
        let mut response = ResourceResponse::new(vec![1, 2], raw(200));
        response.push(3);
        assert_eq!(*response, vec![1, 2, 3]);
    }

    #[test]
    fn test_metadata_accessors() {
        let response = ResourceResponse::new("data", raw(201));

        assert_eq!(response.status(), 201);
        assert_eq!(response.etag(), Some("\"v1\""));
        assert!(response.headers().contains_key("etag"));
    }

    #[test]
    fn test_into_parts_returns_both() {
        let response = ResourceResponse::new(7, raw(200));
        let (data, raw) = response.into_parts();

        assert_eq!(data, 7);
        assert_eq!(raw.status, 200);
    }

    #[test]
    fn test_map_preserves_response() {
        let response = ResourceResponse::new(vec![1, 2, 3], raw(200));
        let mapped = response.map(|v| v.len());

        assert_eq!(*mapped, 3);
        assert_eq!(mapped.etag(), Some("\"v1\""));
        assert_eq!(mapped.into_inner(), 3);
    }
}
