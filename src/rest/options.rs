//! The typed request builder.
//!
//! An options value implements [`OperationOptions`] to describe which of its
//! fields are required and how the set ones map to path parameters, query
//! parameters, headers and a body. [`build_request`] turns it into a fully
//! resolved [`HttpRequest`] or a [`ValidationError`]. No I/O happens here.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use global_catalog::clients::HttpMethod;
//! use global_catalog::rest::{build_request, OperationOptions, OperationPath, QueryParams, ResponseKind};
//!
//! #[derive(Default)]
//! struct GetThingOptions {
//!     id: Option<String>,
//!     account: Option<String>,
//!     headers: HashMap<String, String>,
//! }
//!
//! impl OperationOptions for GetThingOptions {
//!     const OPTIONS_NAME: &'static str = "getThingOptions";
//!
//!     fn missing_required_fields(&self) -> Vec<&'static str> {
//!         if self.id.is_none() { vec!["id"] } else { Vec::new() }
//!     }
//!
//!     fn path_params(&self) -> Vec<(&'static str, &str)> {
//!         self.id.as_deref().map(|id| ("id", id)).into_iter().collect()
//!     }
//!
//!     fn query_params(&self) -> QueryParams {
//!         let mut query = QueryParams::new();
//!         query.push_opt("account", self.account.as_deref());
//!         query
//!     }
//!
//!     fn headers(&self) -> &HashMap<String, String> {
//!         &self.headers
//!     }
//! }
//!
//! const GET_THING: OperationPath =
//!     OperationPath::new(HttpMethod::Get, "GetThing", "/{id}", ResponseKind::Json);
//!
//! let options = GetThingOptions { id: Some("x".into()), ..Default::default() };
//! let request = build_request("https://example.com/api", &GET_THING, Some(&options)).unwrap();
//! assert_eq!(request.url, "https://example.com/api/x");
//! assert!(request.query.is_empty());
//!
//! let err = build_request("https://example.com/api", &GET_THING, Some(&GetThingOptions::default()));
//! assert!(err.is_err());
//! ```

use std::collections::HashMap;

use crate::clients::{CatalogError, HttpRequest, RequestBody, ValidationError};
use crate::model::SerializationError;
use crate::rest::path::{build_path, OperationPath};
use crate::rest::query::QueryParams;

/// Name of the SDK analytics header.
pub const ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

/// Service name reported in the analytics header.
pub const ANALYTICS_SERVICE_NAME: &str = "global_catalog";

/// Service version reported in the analytics header.
pub const ANALYTICS_SERVICE_VERSION: &str = "V1";

/// The inputs of one API operation.
pub trait OperationOptions {
    /// The name used in validation messages (e.g., `getCatalogEntryOptions`).
    const OPTIONS_NAME: &'static str;

    /// Returns the names of every required field that is unset.
    fn missing_required_fields(&self) -> Vec<&'static str>;

    /// Returns the values of the path placeholders that are set.
    fn path_params(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    /// Returns the query parameters for the optional fields that are set.
    fn query_params(&self) -> QueryParams {
        QueryParams::new()
    }

    /// Returns the request body, if the operation carries one.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] if the body cannot be encoded.
    fn body(&self) -> Result<Option<RequestBody>, SerializationError> {
        Ok(None)
    }

    /// Returns the `Content-Type` to send when [`body`](Self::body) yields
    /// nothing.
    fn content_type(&self) -> Option<&str> {
        None
    }

    /// Returns the caller-supplied headers.
    fn headers(&self) -> &HashMap<String, String>;
}

/// Checks that options are present and every required field is set.
///
/// # Errors
///
/// Returns [`ValidationError::MissingOptions`] for `None` and
/// [`ValidationError::MissingRequiredFields`] naming every unset field.
pub fn validate_options<O: OperationOptions>(options: Option<&O>) -> Result<&O, ValidationError> {
    let options = options.ok_or(ValidationError::MissingOptions {
        options: O::OPTIONS_NAME,
    })?;

    let fields = options.missing_required_fields();
    if !fields.is_empty() {
        return Err(ValidationError::MissingRequiredFields {
            options: O::OPTIONS_NAME,
            fields,
        });
    }

    Ok(options)
}

/// Returns the analytics header value for an operation.
#[must_use]
pub fn analytics_header_value(operation_id: &str) -> String {
    format!(
        "service_name={ANALYTICS_SERVICE_NAME};service_version={ANALYTICS_SERVICE_VERSION};operation_id={operation_id}"
    )
}

/// Validates `options` and builds the request for `path`.
///
/// Caller headers are applied first; the operation's `Accept`, body
/// `Content-Type` and analytics headers then replace any caller header of
/// the same name.
///
/// # Errors
///
/// Returns [`CatalogError::Validation`] if validation fails or a path
/// parameter is missing, and [`CatalogError::Serialization`] if the body
/// cannot be encoded.
pub fn build_request<O: OperationOptions>(
    service_url: &str,
    path: &OperationPath,
    options: Option<&O>,
) -> Result<HttpRequest, CatalogError> {
    let options = validate_options(options)?;

    let resolved = build_path(path.template, &options.path_params())?;
    let url = format!("{}{resolved}", service_url.trim_end_matches('/'));

    let mut builder = HttpRequest::builder(path.http_method, url)
        .headers(options.headers())
        .query_pairs(options.query_params().into_pairs());

    if let Some(accept) = path.response.accept() {
        builder = builder.header("Accept", accept);
    }
    builder = builder.header(ANALYTICS_HEADER, analytics_header_value(path.operation_id));

    if let Some(body) = options.body()? {
        builder = builder.body(body);
    } else if let Some(content_type) = options.content_type() {
        builder = builder.header("Content-Type", content_type);
    }

    Ok(builder.build()?)
}
