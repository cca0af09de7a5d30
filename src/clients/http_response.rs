//! HTTP response types for the Global Catalog SDK.
//!
//! This module provides [`DetailedResponse`], the raw response descriptor
//! returned by a [`Transport`](crate::clients::Transport). It is surfaced to
//! callers on success and attached to every error that has a response.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// A raw response from the Global Catalog API.
///
/// Header names are stored lower-cased; a header may carry several values.
///
/// # Example
///
/// ```rust
/// use global_catalog::clients::DetailedResponse;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("etag".to_string(), vec!["\"abc\"".to_string()]);
///
/// let response = DetailedResponse::new(200, headers, br#"{"id":"x"}"#.to_vec());
/// assert!(response.is_success());
/// assert_eq!(response.header("ETag"), Some("\"abc\""));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailedResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl DetailedResponse {
    /// Creates a new response, normalizing header names to lower case.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::with_capacity(headers.len());
        for (name, values) in headers {
            normalized
                .entry(name.to_ascii_lowercase())
                .or_default()
                .extend(values);
        }
        Self {
            status,
            headers: normalized,
            body,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the `ETag` header.
    #[must_use]
    pub fn etag(&self) -> Option<&str> {
        self.header("etag")
    }

    /// Returns the request identifier assigned by the service, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
            .or_else(|| self.header("x-correlation-id"))
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_range() {
        let ok = DetailedResponse::new(204, HashMap::new(), Vec::new());
        let redirect = DetailedResponse::new(304, HashMap::new(), Vec::new());
        let missing = DetailedResponse::new(404, HashMap::new(), Vec::new());

        assert!(ok.is_success());
        assert!(!redirect.is_success());
        assert!(!missing.is_success());
    }

    #[test]
    fn test_header_names_are_normalized() {
        let mut headers = HashMap::new();
        headers.insert("X-Request-Id".to_string(), vec!["req-1".to_string()]);
        headers.insert("Content-Type".to_string(), vec!["application/json".to_string()]);

        let response = DetailedResponse::new(200, headers, Vec::new());

        assert_eq!(response.request_id(), Some("req-1"));
        assert_eq!(response.content_type(), Some("application/json"));
        assert!(response.headers.contains_key("x-request-id"));
    }

    #[test]
    fn test_json_decoding() {
        let response = DetailedResponse::new(200, HashMap::new(), br#"{"count":2}"#.to_vec());
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value, json!({"count": 2}));
    }

    #[test]
    fn test_text_is_lossy() {
        let response = DetailedResponse::new(200, HashMap::new(), vec![0x68, 0x69, 0xff]);
        assert_eq!(response.text(), "hi\u{fffd}");
    }
}
