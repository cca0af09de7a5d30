//! HTTP client types for Global Catalog API communication.
//!
//! This module provides the request/response plumbing underneath the
//! [`GlobalCatalog`](crate::GlobalCatalog) service client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Authenticates requests and hands them to a transport
//! - [`Transport`]: The seam that executes a request descriptor
//! - [`ReqwestTransport`]: The default `reqwest`-backed transport
//! - [`HttpRequest`]: A fully resolved request descriptor
//! - [`DetailedResponse`]: The raw response (status, headers, body)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RequestBody`]: A JSON or binary request payload
//! - [`CatalogError`]: The unified error returned by every operation
//!
//! # Example
//!
//! ```rust,ignore
//! use global_catalog::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "https://globalcatalog.cloud.ibm.com/api/v1/")
//!     .query_param("q", "kind:service")
//!     .build()
//!     .unwrap();
//!
//! let response = client.send("ListCatalogEntries", request).await?;
//! println!("status {}", response.status);
//! ```

mod errors;
mod http_client;
pub(crate) mod http_request;
mod http_response;
mod transport;

pub use errors::{
    CatalogError, RequestError, ResponseProcessingError, TransportError, ValidationError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody, JSON_CONTENT_TYPE,
    OCTET_STREAM_CONTENT_TYPE,
};
pub use http_response::DetailedResponse;
pub use transport::{ReqwestTransport, Transport};
