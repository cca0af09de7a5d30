//! HTTP client for Global Catalog API communication.
//!
//! This module provides the [`HttpClient`] type, which authenticates fully
//! built requests and hands them to a [`Transport`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::Authenticator;
use crate::clients::errors::TransportError;
use crate::clients::http_request::{set_header, HttpRequest};
use crate::clients::http_response::DetailedResponse;
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::config::{CatalogConfig, ServiceUrl};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Global Catalog API.
///
/// The client handles:
/// - The service base URL
/// - Default headers including User-Agent
/// - Authentication of every outgoing request
/// - Request and response logging
///
/// It does not interpret status codes; see [`crate::rest::decode`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use global_catalog::CatalogConfig;
/// use global_catalog::auth::NoAuthAuthenticator;
/// use global_catalog::clients::HttpClient;
///
/// let config = CatalogConfig::builder()
///     .authenticator(Arc::new(NoAuthAuthenticator))
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// assert_eq!(client.service_url().as_ref(), "https://globalcatalog.cloud.ibm.com/api/v1");
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    service_url: ServiceUrl,
    default_headers: HashMap<String, String>,
    authenticator: Arc<dyn Authenticator>,
    transport: Arc<dyn Transport>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client using the default [`ReqwestTransport`].
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Creates a client using the given transport.
    #[must_use]
    pub fn with_transport(config: &CatalogConfig, transport: Arc<dyn Transport>) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}global-catalog-sdk-rust/{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);

        Self {
            service_url: config.service_url().clone(),
            default_headers,
            authenticator: Arc::clone(config.authenticator()),
            transport,
        }
    }

    /// Returns the service base URL.
    #[must_use]
    pub const fn service_url(&self) -> &ServiceUrl {
        &self.service_url
    }

    /// Replaces the service base URL.
    pub fn set_service_url(&mut self, service_url: ServiceUrl) {
        self.service_url = service_url;
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Authenticates and sends a request, returning the raw response.
    ///
    /// Default headers are added only where the request does not already
    /// carry a header of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if authentication fails or the exchange
    /// cannot be completed. Non-2xx responses are returned as `Ok`.
    pub async fn send(
        &self,
        operation_id: &str,
        mut request: HttpRequest,
    ) -> Result<DetailedResponse, TransportError> {
        for (name, value) in &self.default_headers {
            if request.header(name).is_none() {
                set_header(&mut request.headers, name.as_str(), value.as_str());
            }
        }

        self.authenticator.authenticate(&mut request)?;

        tracing::debug!(
            method = %request.http_method,
            url = %request.url,
            operation = operation_id,
            "Sending request"
        );

        let response = self.transport.execute(&request).await?;

        tracing::debug!(
            status = response.status,
            operation = operation_id,
            "Received response"
        );

        if !response.is_success() {
            tracing::warn!(
                status = response.status,
                operation = operation_id,
                request_id = response.request_id().unwrap_or_default(),
                "Service returned a non-success status"
            );
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{BearerTokenAuthenticator, NoAuthAuthenticator};
    use crate::clients::HttpMethod;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingTransport {
        seen: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn execute(&self, request: &HttpRequest) -> Result<DetailedResponse, TransportError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(DetailedResponse::new(418, HashMap::new(), Vec::new()))
        }
    }

    fn config(prefix: Option<&str>) -> CatalogConfig {
        let mut builder = CatalogConfig::builder()
            .authenticator(Arc::new(BearerTokenAuthenticator::new("tok").unwrap()));
        if let Some(prefix) = prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_user_agent_format() {
        let client = HttpClient::with_transport(
            &config(None),
            Arc::new(RecordingTransport::default()),
        );
        let user_agent = client.default_headers().get("User-Agent").unwrap();

        assert!(user_agent.starts_with("global-catalog-sdk-rust/"));
        assert!(user_agent.contains(SDK_VERSION));
        assert!(user_agent.contains("| Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = HttpClient::with_transport(
            &config(Some("MyApp/1.0")),
            Arc::new(RecordingTransport::default()),
        );
        let user_agent = client.default_headers().get("User-Agent").unwrap();

        assert!(user_agent.starts_with("MyApp/1.0 | global-catalog-sdk-rust/"));
    }

    #[tokio::test]
    async fn test_send_adds_auth_and_default_headers() {
        let transport = Arc::new(RecordingTransport::default());
        let client = HttpClient::with_transport(&config(None), transport.clone());
        let request = HttpRequest::builder(HttpMethod::Get, "https://example.com/api/v1/x")
            .build()
            .unwrap();

        let response = client.send("getCatalogEntry", request).await.unwrap();

        assert_eq!(response.status, 418);
        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].header("Authorization"), Some("Bearer tok"));
        assert!(seen[0].header("user-agent").is_some());
    }

    #[tokio::test]
    async fn test_send_keeps_caller_user_agent() {
        let transport = Arc::new(RecordingTransport::default());
        let config = CatalogConfig::builder()
            .authenticator(Arc::new(NoAuthAuthenticator))
            .build()
            .unwrap();
        let client = HttpClient::with_transport(&config, transport.clone());
        let request = HttpRequest::builder(HttpMethod::Get, "https://example.com")
            .header("user-agent", "custom")
            .build()
            .unwrap();

        client.send("listCatalogEntries", request).await.unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].header("User-Agent"), Some("custom"));
        assert!(seen[0].header("Authorization").is_none());
    }

    #[test]
    fn test_set_service_url() {
        let mut client = HttpClient::with_transport(
            &config(None),
            Arc::new(RecordingTransport::default()),
        );
        client.set_service_url(ServiceUrl::new("https://testService/api").unwrap());
        assert_eq!(client.service_url().as_ref(), "https://testService/api");
    }
}
