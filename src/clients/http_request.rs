//! HTTP request types for the Global Catalog SDK.
//!
//! This module provides the [`HttpRequest`] descriptor and its builder. A
//! built request is fully resolved: absolute URL, query pairs, headers and
//! body are all known, so any [`Transport`](crate::clients::Transport) can
//! execute it without further input.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::clients::errors::ValidationError;
use crate::model::SerializationError;

/// HTTP methods used by the Global Catalog API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` for methods that may carry a request body.
    #[must_use]
    pub const fn allows_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON content type.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Fallback content type for binary payloads without an explicit type.
pub const OCTET_STREAM_CONTENT_TYPE: &str = "application/octet-stream";

/// The body of a request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON document, sent as `application/json`.
    Json(serde_json::Value),
    /// A raw byte payload with a caller-specified content type.
    Binary {
        /// The content type of the payload.
        content_type: Option<String>,
        /// The payload.
        data: Vec<u8>,
    },
}

impl RequestBody {
    /// Serializes `value` into a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] if `value` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, SerializationError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Returns the content type this body is sent with.
    #[must_use]
    pub fn content_type(&self) -> &str {
        match self {
            Self::Json(_) => JSON_CONTENT_TYPE,
            Self::Binary { content_type, .. } => {
                content_type.as_deref().unwrap_or(OCTET_STREAM_CONTENT_TYPE)
            }
        }
    }

    /// Returns the encoded bytes of this body.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Json(value) => value.to_string().into_bytes(),
            Self::Binary { data, .. } => data.clone(),
        }
    }
}

/// Inserts a header, replacing any existing header with the same name
/// regardless of case.
pub(crate) fn set_header(
    headers: &mut HashMap<String, String>,
    name: impl Into<String>,
    value: impl Into<String>,
) {
    let name = name.into();
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
    headers.insert(name, value.into());
}

/// A fully resolved request descriptor.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use global_catalog::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "https://example.com/api/v1/my-service")
///     .query_param("complete", "true")
///     .header("Accept", "application/json")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     request.full_url(),
///     "https://example.com/api/v1/my-service?complete=true"
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL, without query string.
    pub url: String,
    /// Query parameters in emission order; names may repeat.
    pub query: Vec<(String, String)>,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// The request body, if any.
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// Creates a new builder for the given method and absolute URL.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnexpectedBody`] if a GET or DELETE request
    /// carries a body.
    pub fn verify(&self) -> Result<(), ValidationError> {
        if self.body.is_some() && !self.http_method.allows_body() {
            return Err(ValidationError::UnexpectedBody {
                method: self.http_method.to_string(),
            });
        }
        Ok(())
    }

    /// Returns a header value, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns all values of a query parameter in emission order.
    #[must_use]
    pub fn query_values(&self, name: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// Returns the URL including the percent-encoded query string.
    #[must_use]
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.url)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    query: Vec<(String, String)>,
    headers: HashMap<String, String>,
    body: Option<RequestBody>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            query: Vec::new(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends every pair from `pairs`.
    #[must_use]
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Sets a header, replacing any header with the same name.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, key, value);
        self
    }

    /// Sets every header from `headers`.
    #[must_use]
    pub fn headers<'a>(mut self, headers: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        for (key, value) in headers {
            set_header(&mut self.headers, key.as_str(), value.as_str());
        }
        self
    }

    /// Sets the request body and its `Content-Type` header.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        set_header(&mut self.headers, "Content-Type", body.content_type());
        self.body = Some(body);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, ValidationError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            query: self.query,
            headers: self.headers,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let request = HttpRequest::builder(HttpMethod::Post, "https://example.com/api")
            .body(RequestBody::json(&json!({"name": "x"})).unwrap())
            .build()
            .unwrap();

        assert_eq!(request.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_binary_body_uses_given_content_type() {
        let body = RequestBody::Binary {
            content_type: Some("text/yaml".to_string()),
            data: b"a: 1".to_vec(),
        };
        assert_eq!(body.content_type(), "text/yaml");
        assert_eq!(body.to_bytes(), b"a: 1".to_vec());

        let untyped = RequestBody::Binary {
            content_type: None,
            data: Vec::new(),
        };
        assert_eq!(untyped.content_type(), OCTET_STREAM_CONTENT_TYPE);
    }

    #[test]
    fn test_body_rejected_for_get() {
        let result = HttpRequest::builder(HttpMethod::Get, "https://example.com/api")
            .body(RequestBody::Json(json!({})))
            .build();

        assert!(matches!(
            result,
            Err(ValidationError::UnexpectedBody { method }) if method == "GET"
        ));
    }

    #[test]
    fn test_put_without_body_is_allowed() {
        let request = HttpRequest::builder(HttpMethod::Put, "https://example.com/api/x/restore")
            .build()
            .unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_header_replacement_ignores_case() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://example.com")
            .header("accept", "text/plain")
            .header("Accept", "application/json")
            .build()
            .unwrap();

        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("ACCEPT"), Some("application/json"));
    }

    #[test]
    fn test_full_url_encodes_and_repeats_query() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://example.com/api")
            .query_param("q", "kind:service tag:a&b")
            .query_param("tag", "one")
            .query_param("tag", "two")
            .build()
            .unwrap();

        assert_eq!(
            request.full_url(),
            "https://example.com/api?q=kind%3Aservice%20tag%3Aa%26b&tag=one&tag=two"
        );
        assert_eq!(request.query_values("tag"), vec!["one", "two"]);
    }
}
