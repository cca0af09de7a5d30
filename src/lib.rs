//! # Global Catalog SDK
//!
//! A Rust client for the Global Catalog API: typed options for every
//! operation, a record model that keeps unknown JSON keys, and a single
//! error type describing where a call failed.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`CatalogConfig`] and [`CatalogConfigBuilder`],
//!   or from `GLOBAL_CATALOG_*` environment variables
//! - Pluggable authentication via [`auth::Authenticator`]
//! - The [`GlobalCatalog`] client with one async method per operation
//! - Catalog models in [`model`], including [`model::ExtensibleRecord`] for
//!   objects with open-ended keys
//! - Validation before any I/O, and [`CatalogError`] for everything that
//!   can go wrong afterwards
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use global_catalog::{CatalogConfig, GlobalCatalog};
//! use global_catalog::auth::NoAuthAuthenticator;
//! use global_catalog::service::ListCatalogEntriesOptions;
//!
//! # async fn run() -> Result<(), global_catalog::CatalogError> {
//! let config = CatalogConfig::builder()
//!     .authenticator(Arc::new(NoAuthAuthenticator))
//!     .build()
//!     .unwrap();
//! let catalog = GlobalCatalog::new(&config);
//!
//! let options = ListCatalogEntriesOptions::new().with_q("kind:service").with_complete(true);
//! let page = catalog.list_catalog_entries(Some(&options)).await?;
//! for entry in &page.resources {
//!     println!("{:?}", entry.name);
//! }
//! if let Some(offset) = page.next_offset() {
//!     println!("more results from offset {offset}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! ```rust
//! use global_catalog::{CatalogConfig, CatalogError, GlobalCatalog};
//! use global_catalog::auth::NoAuthAuthenticator;
//! use global_catalog::service::CreateCatalogEntryOptions;
//! # use std::sync::Arc;
//!
//! # run();
//! # fn run() {
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let config = CatalogConfig::builder()
//!     .authenticator(Arc::new(NoAuthAuthenticator))
//!     .build()
//!     .unwrap();
//! let catalog = GlobalCatalog::new(&config);
//!
//! // Incomplete options fail before any request is sent.
//! let err = catalog
//!     .create_catalog_entry(Some(&CreateCatalogEntryOptions::default()))
//!     .await
//!     .unwrap_err();
//! assert!(err.is_validation());
//! assert!(err.response().is_none());
//! # });
//! # }
//! ```
//!
//! ## Logging
//!
//! The SDK logs through [`tracing`]. Install a subscriber to see request
//! and response events; none is installed by the library.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod model;
pub mod rest;
pub mod service;

// Re-export public types at crate root for convenience
pub use config::{BearerToken, CatalogConfig, CatalogConfigBuilder, Password, ServiceUrl};
pub use error::ConfigError;

// Re-export the client and its error taxonomy
pub use clients::{
    CatalogError, DetailedResponse, RequestError, ResponseProcessingError, TransportError,
    ValidationError,
};
pub use model::{PropertyError, SerializationError};
pub use rest::ResourceResponse;
pub use service::GlobalCatalog;
