//! Request construction and response decoding for catalog operations.
//!
//! This module provides the core that every [`GlobalCatalog`](crate::GlobalCatalog)
//! operation is built on:
//!
//! - **[`OperationOptions`] trait**: describes how an options value maps to a request
//! - **[`build_request`]**: validates options and produces an [`HttpRequest`](crate::clients::HttpRequest)
//! - **[`OperationPath`]**: constant per-operation method, template and response kind
//! - **[`QueryParams`]**: emits only the optional parameters that are set
//! - **[`decode`]**: status checking and JSON/binary/no-content decoding
//! - **[`ResourceResponse<T>`]**: a Deref-based wrapper pairing data with the raw response
//!
//! # Overview
//!
//! Calling an operation goes through four steps:
//!
//! 1. [`validate_options`] rejects absent options and unset required fields
//! 2. [`build_request`] resolves the path, query, headers and body
//! 3. [`HttpClient::send`](crate::clients::HttpClient::send) authenticates and executes it
//! 4. a [`decode`] function turns the raw response into the typed result
//!
//! Nothing is sent if step 1 or 2 fails.

pub mod decode;
mod options;
mod path;
mod query;
mod response;

// Public exports
pub use options::{
    analytics_header_value, build_request, validate_options, OperationOptions,
    ANALYTICS_HEADER, ANALYTICS_SERVICE_NAME, ANALYTICS_SERVICE_VERSION,
};
pub use path::{build_path, OperationPath, ResponseKind};
pub use query::QueryParams;
pub use response::ResourceResponse;
