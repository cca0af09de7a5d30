//! Transport abstraction for executing request descriptors.
//!
//! The SDK never opens sockets outside a [`Transport`]. The default
//! implementation, [`ReqwestTransport`], is backed by `reqwest`; tests and
//! embedders can supply their own.

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::DetailedResponse;

/// Executes fully resolved requests.
///
/// Implementations return a [`DetailedResponse`] for every response the
/// server produced, whatever its status; only failures to complete the
/// exchange are reported as [`TransportError`].
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Sends `request` and returns the raw response.
    async fn execute(&self, request: &HttpRequest) -> Result<DetailedResponse, TransportError>;
}

/// A [`Transport`] backed by a `reqwest` client.
///
/// # Example
///
/// ```rust
/// use global_catalog::clients::ReqwestTransport;
///
/// let transport = ReqwestTransport::new();
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport with a default rustls-backed client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    /// Creates a transport around an existing client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Collects response headers into a lower-cased multi-map.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &HttpRequest) -> Result<DetailedResponse, TransportError> {
        let url = reqwest::Url::parse(&request.url).map_err(|_| TransportError::InvalidUrl {
            url: request.url.clone(),
        })?;

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        for (key, value) in &request.headers {
            let name = reqwest::header::HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| TransportError::InvalidHeader { name: key.clone() })?;
            let value = reqwest::header::HeaderValue::from_str(value)
                .map_err(|_| TransportError::InvalidHeader { name: key.clone() })?;
            req_builder = req_builder.header(name, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_bytes());
        }

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        Ok(DetailedResponse::new(status, headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_is_reported_before_sending() {
        let transport = ReqwestTransport::new();
        let request = HttpRequest::builder(HttpMethod::Get, "not a url")
            .build()
            .unwrap();

        let result = transport.execute(&request).await;

        assert!(matches!(
            result,
            Err(TransportError::InvalidUrl { url }) if url == "not a url"
        ));
    }

    #[tokio::test]
    async fn test_invalid_header_is_reported_before_sending() {
        let transport = ReqwestTransport::new();
        let request = HttpRequest::builder(HttpMethod::Get, "http://127.0.0.1:9/")
            .header("bad header", "value")
            .build()
            .unwrap();

        let result = transport.execute(&request).await;

        assert!(matches!(
            result,
            Err(TransportError::InvalidHeader { name }) if name == "bad header"
        ));
    }

    #[test]
    fn test_transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestTransport>();
    }
}
