//! Configuration types for the Global Catalog SDK.
//!
//! This module provides the configuration used to construct a
//! [`GlobalCatalog`](crate::GlobalCatalog) service client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CatalogConfig`]: The main configuration struct holding all SDK settings
//! - [`CatalogConfigBuilder`]: A builder for constructing [`CatalogConfig`] instances
//! - [`ServiceUrl`]: A validated service base URL
//! - [`BearerToken`]: A validated bearer token with masked debug output
//! - [`Password`]: A validated password with masked debug output
//!
//! # Environment
//!
//! [`CatalogConfig::from_env`] reads the following variables, where `<NAME>`
//! is the upper-cased service name with `-` replaced by `_`:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `<NAME>_URL` | Service base URL (optional) |
//! | `<NAME>_AUTH_TYPE` | `noauth`, `bearerToken` or `basic` |
//! | `<NAME>_BEARER_TOKEN` | Token for `bearerToken` |
//! | `<NAME>_USERNAME` / `<NAME>_PASSWORD` | Credentials for `basic` |
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use global_catalog::{CatalogConfig, ServiceUrl};
//! use global_catalog::auth::NoAuthAuthenticator;
//!
//! let config = CatalogConfig::builder()
//!     .authenticator(Arc::new(NoAuthAuthenticator))
//!     .service_url(ServiceUrl::new("https://globalcatalog.test.cloud.ibm.com/api/v1").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.service_name(), "global_catalog");
//! ```

mod newtypes;

pub use newtypes::{BearerToken, Password, ServiceUrl};

use std::sync::Arc;

use crate::auth::{
    AuthType, Authenticator, BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator,
};
use crate::error::ConfigError;

/// Default base URL of the Global Catalog API.
pub const DEFAULT_SERVICE_URL: &str = "https://globalcatalog.cloud.ibm.com/api/v1";

/// Default service name, used for environment lookup and analytics.
pub const DEFAULT_SERVICE_NAME: &str = "global_catalog";

/// Configuration for the Global Catalog SDK.
///
/// # Thread Safety
///
/// `CatalogConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    service_url: ServiceUrl,
    service_name: String,
    authenticator: Arc<dyn Authenticator>,
    user_agent_prefix: Option<String>,
}

impl CatalogConfig {
    /// Creates a new builder for constructing a `CatalogConfig`.
    #[must_use]
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::new()
    }

    /// Builds a configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// See [`CatalogConfig::from_lookup`].
    pub fn from_env(service_name: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(service_name, |key| std::env::var(key).ok())
    }

    /// Builds a configuration from process environment variables, with an
    /// explicit service URL that takes precedence over `<NAME>_URL`.
    ///
    /// # Errors
    ///
    /// See [`CatalogConfig::from_lookup`].
    pub fn from_env_with_url(
        service_name: &str,
        service_url: Option<ServiceUrl>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup_with_url(service_name, service_url, |key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable source.
    ///
    /// `lookup` is called with fully-qualified variable names such as
    /// `GLOBAL_CATALOG_AUTH_TYPE`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the auth type or a
    /// credential it needs is unset, [`ConfigError::UnsupportedAuthType`] for
    /// an unknown scheme, and [`ConfigError::InvalidServiceUrl`] if the URL
    /// variable is malformed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use global_catalog::CatalogConfig;
    ///
    /// let config = CatalogConfig::from_lookup("global_catalog", |key| match key {
    ///     "GLOBAL_CATALOG_URL" => Some("https://globalcatalogv1/api".to_string()),
    ///     "GLOBAL_CATALOG_AUTH_TYPE" => Some("noauth".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.service_url().as_ref(), "https://globalcatalogv1/api");
    /// assert_eq!(config.authenticator().auth_type(), "noauth");
    /// ```
    pub fn from_lookup<F>(service_name: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with_url(service_name, None, lookup)
    }

    /// Like [`CatalogConfig::from_lookup`], but `service_url`, when given,
    /// wins over `<NAME>_URL`. A malformed `<NAME>_URL` is not read at all
    /// in that case.
    ///
    /// # Errors
    ///
    /// See [`CatalogConfig::from_lookup`].
    pub fn from_lookup_with_url<F>(
        service_name: &str,
        service_url: Option<ServiceUrl>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = service_name.to_ascii_uppercase().replace('-', "_");
        let var = |suffix: &str| {
            lookup(&format!("{prefix}_{suffix}")).filter(|value| !value.is_empty())
        };

        let auth_type: AuthType = var("AUTH_TYPE")
            .ok_or(ConfigError::MissingRequiredField { field: "auth_type" })?
            .parse()?;

        let authenticator: Arc<dyn Authenticator> = match auth_type {
            AuthType::NoAuth => Arc::new(NoAuthAuthenticator),
            AuthType::BearerToken => {
                let token = var("BEARER_TOKEN").ok_or(ConfigError::MissingRequiredField {
                    field: "bearer_token",
                })?;
                Arc::new(BearerTokenAuthenticator::new(token)?)
            }
            AuthType::Basic => {
                let username = var("USERNAME")
                    .ok_or(ConfigError::MissingRequiredField { field: "username" })?;
                let password = var("PASSWORD")
                    .ok_or(ConfigError::MissingRequiredField { field: "password" })?;
                Arc::new(BasicAuthenticator::new(username, password)?)
            }
        };

        let mut builder = CatalogConfigBuilder::new()
            .service_name(service_name)
            .authenticator(authenticator);
        if let Some(url) = service_url {
            builder = builder.service_url(url);
        } else if let Some(url) = var("URL") {
            builder = builder.service_url(ServiceUrl::new(url)?);
        }
        let config = builder.build()?;

        tracing::debug!(
            service_name = %config.service_name,
            service_url = %config.service_url,
            auth_type = %auth_type,
            "Resolved service configuration from environment"
        );

        Ok(config)
    }

    /// Returns the service base URL.
    #[must_use]
    pub const fn service_url(&self) -> &ServiceUrl {
        &self.service_url
    }

    /// Returns the service name.
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Returns the authenticator.
    #[must_use]
    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns a copy of this configuration pointing at a different URL.
    #[must_use]
    pub fn with_service_url(mut self, service_url: ServiceUrl) -> Self {
        self.service_url = service_url;
        self
    }
}

// Verify CatalogConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CatalogConfig>();
};

/// Builder for constructing [`CatalogConfig`] instances.
///
/// The only required field is `authenticator`.
///
/// # Defaults
///
/// - `service_url`: [`DEFAULT_SERVICE_URL`]
/// - `service_name`: [`DEFAULT_SERVICE_NAME`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct CatalogConfigBuilder {
    service_url: Option<ServiceUrl>,
    service_name: Option<String>,
    authenticator: Option<Arc<dyn Authenticator>>,
    user_agent_prefix: Option<String>,
}

impl CatalogConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service base URL.
    #[must_use]
    pub fn service_url(mut self, url: ServiceUrl) -> Self {
        self.service_url = Some(url);
        self
    }

    /// Sets the service name.
    #[must_use]
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    /// Sets the authenticator (required).
    #[must_use]
    pub fn authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`CatalogConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `authenticator` is not
    /// set.
    pub fn build(self) -> Result<CatalogConfig, ConfigError> {
        let authenticator = self.authenticator.ok_or(ConfigError::MissingRequiredField {
            field: "authenticator",
        })?;

        let service_url = match self.service_url {
            Some(url) => url,
            None => ServiceUrl::new(DEFAULT_SERVICE_URL)?,
        };

        Ok(CatalogConfig {
            service_url,
            service_name: self
                .service_name
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            authenticator,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
