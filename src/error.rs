//! Configuration error types for the Global Catalog SDK.
//!
//! This module contains the errors raised while building a
//! [`CatalogConfig`](crate::CatalogConfig) or one of its validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Errors raised while *calling* the service live in
//! [`clients`](crate::clients) instead.
//!
//! # Example
//!
//! ```rust
//! use global_catalog::{ConfigError, ServiceUrl};
//!
//! let result = ServiceUrl::new("{{BAD_URL_STRING");
//! assert!(matches!(result, Err(ConfigError::InvalidServiceUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The service URL could not be parsed or is not an http(s) URL.
    #[error("Invalid service URL '{url}'. Expected an absolute http or https URL (e.g., 'https://globalcatalog.cloud.ibm.com/api/v1').")]
    InvalidServiceUrl {
        /// The URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The configured authentication type is not supported by this SDK.
    #[error("Unsupported authentication type '{auth_type}'. Supported types: noauth, bearerToken, basic.")]
    UnsupportedAuthType {
        /// The authentication type that was configured.
        auth_type: String,
    },

    /// A credential value was empty.
    #[error("Credential '{field}' cannot be empty.")]
    EmptyCredential {
        /// The name of the empty credential.
        field: &'static str,
    },
}
