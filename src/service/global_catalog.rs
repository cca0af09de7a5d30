//! The Global Catalog service client.
//!
//! [`GlobalCatalog`] exposes one async method per API operation. Each method
//! validates its options, builds exactly one request, sends it and decodes
//! the response. Nothing is retried.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{CatalogError, DetailedResponse, HttpClient, HttpMethod, Transport};
use crate::config::{CatalogConfig, ServiceUrl, DEFAULT_SERVICE_NAME};
use crate::error::ConfigError;
use crate::model::{Artifacts, CatalogEntry, Page, PricingGet, Visibility};
use crate::rest::decode::{decode_binary, decode_json, decode_no_content};
use crate::rest::{build_request, OperationOptions, OperationPath, ResourceResponse, ResponseKind};
use crate::service::options::{
    CreateCatalogEntryOptions, DeleteArtifactOptions, DeleteCatalogEntryOptions,
    GetArtifactOptions, GetAuditLogsOptions, GetCatalogEntryOptions, GetChildObjectsOptions,
    GetPricingOptions, GetVisibilityOptions, ListArtifactsOptions, ListCatalogEntriesOptions,
    RestoreCatalogEntryOptions, UpdateCatalogEntryOptions, UpdateVisibilityOptions,
    UploadArtifactOptions,
};

const LIST_CATALOG_ENTRIES: OperationPath =
    OperationPath::new(HttpMethod::Get, "ListCatalogEntries", "/", ResponseKind::Json);
const CREATE_CATALOG_ENTRY: OperationPath =
    OperationPath::new(HttpMethod::Post, "CreateCatalogEntry", "/", ResponseKind::Json);
const GET_CATALOG_ENTRY: OperationPath =
    OperationPath::new(HttpMethod::Get, "GetCatalogEntry", "/{id}", ResponseKind::Json);
const UPDATE_CATALOG_ENTRY: OperationPath =
    OperationPath::new(HttpMethod::Put, "UpdateCatalogEntry", "/{id}", ResponseKind::Json);
const DELETE_CATALOG_ENTRY: OperationPath = OperationPath::new(
    HttpMethod::Delete,
    "DeleteCatalogEntry",
    "/{id}",
    ResponseKind::NoContent,
);
const GET_CHILD_OBJECTS: OperationPath =
    OperationPath::new(HttpMethod::Get, "GetChildObjects", "/{id}/{kind}", ResponseKind::Json);
const RESTORE_CATALOG_ENTRY: OperationPath = OperationPath::new(
    HttpMethod::Put,
    "RestoreCatalogEntry",
    "/{id}/restore",
    ResponseKind::NoContent,
);
const GET_VISIBILITY: OperationPath =
    OperationPath::new(HttpMethod::Get, "GetVisibility", "/{id}/visibility", ResponseKind::Json);
const UPDATE_VISIBILITY: OperationPath = OperationPath::new(
    HttpMethod::Put,
    "UpdateVisibility",
    "/{id}/visibility",
    ResponseKind::NoContent,
);
const GET_PRICING: OperationPath =
    OperationPath::new(HttpMethod::Get, "GetPricing", "/{id}/pricing", ResponseKind::Json);
const GET_AUDIT_LOGS: OperationPath =
    OperationPath::new(HttpMethod::Get, "GetAuditLogs", "/{id}/logs", ResponseKind::Json);
const LIST_ARTIFACTS: OperationPath = OperationPath::new(
    HttpMethod::Get,
    "ListArtifacts",
    "/{object_id}/artifacts",
    ResponseKind::Json,
);
const GET_ARTIFACT: OperationPath = OperationPath::new(
    HttpMethod::Get,
    "GetArtifact",
    "/{object_id}/artifacts/{artifact_id}",
    ResponseKind::Binary,
);
const UPLOAD_ARTIFACT: OperationPath = OperationPath::new(
    HttpMethod::Put,
    "UploadArtifact",
    "/{object_id}/artifacts/{artifact_id}",
    ResponseKind::NoContent,
);
const DELETE_ARTIFACT: OperationPath = OperationPath::new(
    HttpMethod::Delete,
    "DeleteArtifact",
    "/{object_id}/artifacts/{artifact_id}",
    ResponseKind::NoContent,
);

/// Client for the Global Catalog API.
///
/// Every operation returns either a [`ResourceResponse`] holding the typed
/// result and the raw response, or the raw [`DetailedResponse`] alone for
/// operations without a result body.
///
/// # Thread Safety
///
/// `GlobalCatalog` is `Send + Sync` and cheap to clone.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use global_catalog::{CatalogConfig, GlobalCatalog};
/// use global_catalog::auth::BearerTokenAuthenticator;
/// use global_catalog::service::GetCatalogEntryOptions;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CatalogConfig::builder()
///     .authenticator(Arc::new(BearerTokenAuthenticator::new("my-token")?))
///     .build()?;
/// let catalog = GlobalCatalog::new(&config);
///
/// let entry = catalog
///     .get_catalog_entry(Some(&GetCatalogEntryOptions::new("cloudant").with_complete(true)))
///     .await?;
/// println!("{:?} ({})", entry.name, entry.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GlobalCatalog {
    http_client: HttpClient,
}

// Verify GlobalCatalog is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GlobalCatalog>();
};

impl GlobalCatalog {
    /// Creates a client sending requests over HTTP.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Creates a client sending requests through `transport`.
    #[must_use]
    pub fn with_transport(config: &CatalogConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            http_client: HttpClient::with_transport(config, transport),
        }
    }

    /// Creates a client configured from `GLOBAL_CATALOG_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`CatalogConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = CatalogConfig::from_env(DEFAULT_SERVICE_NAME)?;
        Ok(Self::new(&config))
    }

    /// Returns the service base URL.
    #[must_use]
    pub const fn service_url(&self) -> &ServiceUrl {
        self.http_client.service_url()
    }

    /// Replaces the service base URL.
    pub fn set_service_url(&mut self, service_url: ServiceUrl) {
        self.http_client.set_service_url(service_url);
    }

    /// Builds and sends one request.
    async fn execute<O: OperationOptions>(
        &self,
        path: &OperationPath,
        options: Option<&O>,
    ) -> Result<DetailedResponse, CatalogError> {
        let request = build_request(self.http_client.service_url().as_ref(), path, options)?;
        Ok(self.http_client.send(path.operation_id, request).await?)
    }

    /// Searches the catalog.
    ///
    /// `None` lists with default options.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn list_catalog_entries(
        &self,
        options: Option<&ListCatalogEntriesOptions>,
    ) -> Result<ResourceResponse<Page<CatalogEntry>>, CatalogError> {
        let default_options = ListCatalogEntriesOptions::default();
        let options = options.unwrap_or(&default_options);
        let response = self.execute(&LIST_CATALOG_ENTRIES, Some(options)).await?;
        decode_json(response)
    }

    /// Creates a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if options are absent or
    /// incomplete, and other [`CatalogError`] variants if the call fails.
    pub async fn create_catalog_entry(
        &self,
        options: Option<&CreateCatalogEntryOptions>,
    ) -> Result<ResourceResponse<CatalogEntry>, CatalogError> {
        let response = self.execute(&CREATE_CATALOG_ENTRY, options).await?;
        decode_json(response)
    }

    /// Returns a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] without `id`, and other
    /// [`CatalogError`] variants if the call fails.
    pub async fn get_catalog_entry(
        &self,
        options: Option<&GetCatalogEntryOptions>,
    ) -> Result<ResourceResponse<CatalogEntry>, CatalogError> {
        let response = self.execute(&GET_CATALOG_ENTRY, options).await?;
        decode_json(response)
    }

    /// Replaces a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if options are absent or
    /// incomplete, and other [`CatalogError`] variants if the call fails.
    pub async fn update_catalog_entry(
        &self,
        options: Option<&UpdateCatalogEntryOptions>,
    ) -> Result<ResourceResponse<CatalogEntry>, CatalogError> {
        let response = self.execute(&UPDATE_CATALOG_ENTRY, options).await?;
        decode_json(response)
    }

    /// Deletes a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] without `id`, and other
    /// [`CatalogError`] variants if the call fails.
    pub async fn delete_catalog_entry(
        &self,
        options: Option<&DeleteCatalogEntryOptions>,
    ) -> Result<DetailedResponse, CatalogError> {
        let response = self.execute(&DELETE_CATALOG_ENTRY, options).await?;
        Ok(decode_no_content(response)?)
    }

    /// Returns the children of a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] without `id` or `kind`, and other
    /// [`CatalogError`] variants if the call fails.
    pub async fn get_child_objects(
        &self,
        options: Option<&GetChildObjectsOptions>,
    ) -> Result<ResourceResponse<Page<CatalogEntry>>, CatalogError> {
        let response = self.execute(&GET_CHILD_OBJECTS, options).await?;
        decode_json(response)
    }

    /// Restores a deleted catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] without `id`, and other
    /// [`CatalogError`] variants if the call fails.
    pub async fn restore_catalog_entry(
        &self,
        options: Option<&RestoreCatalogEntryOptions>,
    ) -> Result<DetailedResponse, CatalogError> {
        let response = self.execute(&RESTORE_CATALOG_ENTRY, options).await?;
        Ok(decode_no_content(response)?)
    }

    /// Returns the visibility of a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] without `id`, and other
    /// [`CatalogError`] variants if the call fails.
    pub async fn get_visibility(
        &self,
        options: Option<&GetVisibilityOptions>,
    ) -> Result<ResourceResponse<Visibility>, CatalogError> {
        let response = self.execute(&GET_VISIBILITY, options).await?;
        decode_json(response)
    }

    /// Updates the visibility of a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] without `id`, and other
    /// [`CatalogError`] variants if the call fails.
    pub async fn update_visibility(
        &self,
        options: Option<&UpdateVisibilityOptions>,
    ) -> Result<DetailedResponse, CatalogError> {
        let response = self.execute(&UPDATE_VISIBILITY, options).await?;
        Ok(decode_no_content(response)?)
    }

    /// Returns the pricing of a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] without `id`, and other
    /// [`CatalogError`] variants if the call fails.
    pub async fn get_pricing(
        &self,
        options: Option<&GetPricingOptions>,
    ) -> Result<ResourceResponse<PricingGet>, CatalogError> {
        let response = self.execute(&GET_PRICING, options).await?;
        decode_json(response)
    }

    /// Returns the audit log of a catalog entry.
    ///
    /// Log records have no fixed schema and are returned as JSON values.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] without `id`, and other
    /// [`CatalogError`] variants if the call fails.
    pub async fn get_audit_logs(
        &self,
        options: Option<&GetAuditLogsOptions>,
    ) -> Result<ResourceResponse<Page<Value>>, CatalogError> {
        let response = self.execute(&GET_AUDIT_LOGS, options).await?;
        decode_json(response)
    }

    /// Lists the artifacts of a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] without `object_id`, and other
    /// [`CatalogError`] variants if the call fails.
    pub async fn list_artifacts(
        &self,
        options: Option<&ListArtifactsOptions>,
    ) -> Result<ResourceResponse<Artifacts>, CatalogError> {
        let response = self.execute(&LIST_ARTIFACTS, options).await?;
        decode_json(response)
    }

    /// Downloads an artifact.
    ///
    /// The bytes are returned as sent; the raw response keeps the headers,
    /// including `Content-Type`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] without `object_id` or
    /// `artifact_id`, and other [`CatalogError`] variants if the call fails.
    pub async fn get_artifact(
        &self,
        options: Option<&GetArtifactOptions>,
    ) -> Result<ResourceResponse<Vec<u8>>, CatalogError> {
        let response = self.execute(&GET_ARTIFACT, options).await?;
        Ok(decode_binary(response)?)
    }

    /// Uploads an artifact.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] without `object_id` or
    /// `artifact_id`, and other [`CatalogError`] variants if the call fails.
    pub async fn upload_artifact(
        &self,
        options: Option<&UploadArtifactOptions>,
    ) -> Result<DetailedResponse, CatalogError> {
        let response = self.execute(&UPLOAD_ARTIFACT, options).await?;
        Ok(decode_no_content(response)?)
    }

    /// Deletes an artifact.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] without `object_id` or
    /// `artifact_id`, and other [`CatalogError`] variants if the call fails.
    pub async fn delete_artifact(
        &self,
        options: Option<&DeleteArtifactOptions>,
    ) -> Result<DetailedResponse, CatalogError> {
        let response = self.execute(&DELETE_ARTIFACT, options).await?;
        Ok(decode_no_content(response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::NoAuthAuthenticator;
    use crate::clients::{HttpRequest, TransportError, ValidationError};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Answers every request with a canned response and records it.
    #[derive(Debug)]
    struct CannedTransport {
        status: u16,
        body: Vec<u8>,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body: body.as_bytes().to_vec(),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn execute(&self, request: &HttpRequest) -> Result<DetailedResponse, TransportError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(DetailedResponse::new(self.status, HashMap::new(), self.body.clone()))
        }
    }

    fn catalog(transport: Arc<CannedTransport>) -> GlobalCatalog {
        let config = CatalogConfig::builder()
            .service_url(ServiceUrl::new("https://catalog.test/api/v1").unwrap())
            .authenticator(Arc::new(NoAuthAuthenticator))
            .build()
            .unwrap();
        GlobalCatalog::with_transport(&config, transport)
    }

    #[tokio::test]
    async fn test_missing_options_never_reach_transport() {
        let transport = CannedTransport::new(200, "{}");
        let catalog = catalog(Arc::clone(&transport));

        let result = catalog.get_catalog_entry(None).await;

        assert!(matches!(
            result,
            Err(CatalogError::Validation(ValidationError::MissingOptions {
                options: "getCatalogEntryOptions"
            }))
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_list_without_options_uses_defaults() {
        let transport = CannedTransport::new(200, r#"{"offset": 0, "resources": []}"#);
        let catalog = catalog(Arc::clone(&transport));

        let page = catalog.list_catalog_entries(None).await.unwrap();

        assert!(page.resources.is_empty());
        let requests = transport.requests();
        assert_eq!(requests[0].url, "https://catalog.test/api/v1/");
        assert!(requests[0].query.is_empty());
    }

    #[tokio::test]
    async fn test_each_operation_reports_its_id() {
        let transport = CannedTransport::new(200, "{}");
        let catalog = catalog(Arc::clone(&transport));

        catalog
            .restore_catalog_entry(Some(&RestoreCatalogEntryOptions::new("svc")))
            .await
            .unwrap();
        catalog
            .get_pricing(Some(&GetPricingOptions::new("svc")))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].http_method, HttpMethod::Put);
        assert_eq!(requests[0].url, "https://catalog.test/api/v1/svc/restore");
        assert!(requests[0]
            .header("X-IBMCloud-SDK-Analytics")
            .unwrap()
            .ends_with("operation_id=RestoreCatalogEntry"));
        assert!(requests[0].header("Accept").is_none());
        assert_eq!(requests[1].url, "https://catalog.test/api/v1/svc/pricing");
        assert_eq!(requests[1].header("Accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_binary_download_keeps_bytes() {
        let transport = CannedTransport::new(200, "raw \u{1F600} bytes");
        let catalog = catalog(Arc::clone(&transport));

        let artifact = catalog
            .get_artifact(Some(&GetArtifactOptions::new("svc", "file.txt")))
            .await
            .unwrap();

        assert_eq!(artifact.data(), &"raw \u{1F600} bytes".as_bytes().to_vec());
        assert!(transport.requests()[0].header("Accept").is_none());
    }

    #[tokio::test]
    async fn test_set_service_url() {
        let transport = CannedTransport::new(204, "");
        let mut catalog = catalog(Arc::clone(&transport));
        catalog.set_service_url(ServiceUrl::new("http://localhost:9999/").unwrap());

        catalog
            .delete_artifact(Some(&DeleteArtifactOptions::new("svc", "a")))
            .await
            .unwrap();

        assert_eq!(transport.requests()[0].url, "http://localhost:9999/svc/artifacts/a");
    }
}
