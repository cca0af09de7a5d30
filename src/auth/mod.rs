//! Authentication for Global Catalog requests.
//!
//! An [`Authenticator`] attaches credentials to every outgoing
//! [`HttpRequest`] just before it is handed to the transport.
//!
//! # Overview
//!
//! - [`Authenticator`]: The seam every credential scheme implements
//! - [`NoAuthAuthenticator`]: Sends requests without credentials
//! - [`BearerTokenAuthenticator`]: Sends a static bearer token
//! - [`BasicAuthenticator`]: Sends HTTP basic credentials
//! - [`AuthType`]: The scheme names accepted in configuration
//!
//! # Example
//!
//! ```rust
//! use global_catalog::auth::{Authenticator, BearerTokenAuthenticator};
//! use global_catalog::clients::{HttpMethod, HttpRequest};
//!
//! let auth = BearerTokenAuthenticator::new("my-token").unwrap();
//! let mut request = HttpRequest::builder(HttpMethod::Get, "https://example.com")
//!     .build()
//!     .unwrap();
//!
//! auth.authenticate(&mut request).unwrap();
//! assert_eq!(request.header("Authorization"), Some("Bearer my-token"));
//! ```

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::clients::http_request::set_header;
use crate::clients::{HttpRequest, TransportError};
use crate::config::{BearerToken, Password};
use crate::error::ConfigError;

/// Attaches credentials to outgoing requests.
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// Returns the scheme name, as accepted by [`AuthType`].
    fn auth_type(&self) -> &'static str;

    /// Adds credentials to `request`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if credentials cannot be attached.
    fn authenticate(&self, request: &mut HttpRequest) -> Result<(), TransportError>;
}

/// The supported authentication schemes.
///
/// Parsing is case-insensitive.
///
/// # Example
///
/// ```rust
/// use global_catalog::auth::AuthType;
///
/// let auth_type: AuthType = "BearerToken".parse().unwrap();
/// assert_eq!(auth_type, AuthType::BearerToken);
/// assert!("iam-magic".parse::<AuthType>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthType {
    /// No credentials.
    NoAuth,
    /// A static bearer token.
    BearerToken,
    /// HTTP basic authentication.
    Basic,
}

impl AuthType {
    /// Returns the canonical configuration name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoAuth => "noauth",
            Self::BearerToken => "bearertoken",
            Self::Basic => "basic",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "noauth" => Ok(Self::NoAuth),
            "bearertoken" => Ok(Self::BearerToken),
            "basic" => Ok(Self::Basic),
            _ => Err(ConfigError::UnsupportedAuthType {
                auth_type: s.to_string(),
            }),
        }
    }
}

/// Sends requests without credentials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoAuthAuthenticator;

impl Authenticator for NoAuthAuthenticator {
    fn auth_type(&self) -> &'static str {
        AuthType::NoAuth.as_str()
    }

    fn authenticate(&self, _request: &mut HttpRequest) -> Result<(), TransportError> {
        Ok(())
    }
}

/// Sends `Authorization: Bearer <token>`.
#[derive(Clone, Debug)]
pub struct BearerTokenAuthenticator {
    token: BearerToken,
}

impl BearerTokenAuthenticator {
    /// Creates an authenticator for the given token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            token: BearerToken::new(token)?,
        })
    }

    /// Returns the token.
    #[must_use]
    pub const fn token(&self) -> &BearerToken {
        &self.token
    }
}

impl Authenticator for BearerTokenAuthenticator {
    fn auth_type(&self) -> &'static str {
        AuthType::BearerToken.as_str()
    }

    fn authenticate(&self, request: &mut HttpRequest) -> Result<(), TransportError> {
        set_header(
            &mut request.headers,
            "Authorization",
            format!("Bearer {}", self.token.as_ref()),
        );
        Ok(())
    }
}

/// Sends `Authorization: Basic base64(username:password)`.
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: Password,
}

impl BasicAuthenticator {
    /// Creates an authenticator for the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if either value is empty.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyCredential { field: "username" });
        }
        Ok(Self {
            username,
            password: Password::new(password)?,
        })
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &self.password)
            .finish()
    }
}

impl Authenticator for BasicAuthenticator {
    fn auth_type(&self) -> &'static str {
        AuthType::Basic.as_str()
    }

    fn authenticate(&self, request: &mut HttpRequest) -> Result<(), TransportError> {
        let credentials = STANDARD.encode(format!("{}:{}", self.username, self.password.as_ref()));
        set_header(&mut request.headers, "Authorization", format!("Basic {credentials}"));
        Ok(())
    }
}

// Verify authenticators are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NoAuthAuthenticator>();
    assert_send_sync::<BearerTokenAuthenticator>();
    assert_send_sync::<BasicAuthenticator>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;

    fn request() -> HttpRequest {
        HttpRequest::builder(HttpMethod::Get, "https://example.com/api/v1")
            .build()
            .unwrap()
    }

    #[test]
    fn test_auth_type_parsing_is_case_insensitive() {
        assert_eq!("NOAUTH".parse::<AuthType>().unwrap(), AuthType::NoAuth);
        assert_eq!("bearerToken".parse::<AuthType>().unwrap(), AuthType::BearerToken);
        assert_eq!(" basic ".parse::<AuthType>().unwrap(), AuthType::Basic);
    }

    #[test]
    fn test_unsupported_auth_type() {
        let result = "iam".parse::<AuthType>();
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedAuthType { auth_type }) if auth_type == "iam"
        ));
    }

    #[test]
    fn test_no_auth_leaves_request_untouched() {
        let mut req = request();
        NoAuthAuthenticator.authenticate(&mut req).unwrap();
        assert!(req.header("Authorization").is_none());
        assert_eq!(NoAuthAuthenticator.auth_type(), "noauth");
    }

    #[test]
    fn test_bearer_token_replaces_existing_authorization() {
        let mut req = HttpRequest::builder(HttpMethod::Get, "https://example.com")
            .header("authorization", "stale")
            .build()
            .unwrap();
        let auth = BearerTokenAuthenticator::new("abc123").unwrap();

        auth.authenticate(&mut req).unwrap();

        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.header("Authorization"), Some("Bearer abc123"));
    }

    #[test]
    fn test_basic_auth_encodes_credentials() {
        let mut req = request();
        let auth = BasicAuthenticator::new("user", "pass").unwrap();

        auth.authenticate(&mut req).unwrap();

        assert_eq!(req.header("Authorization"), Some("Basic dXNlcjpwYXNz"));
    }

    #[test]
    fn test_basic_auth_rejects_empty_credentials() {
        assert!(matches!(
            BasicAuthenticator::new("", "pass"),
            Err(ConfigError::EmptyCredential { field: "username" })
        ));
        assert!(matches!(
            BasicAuthenticator::new("user", ""),
            Err(ConfigError::EmptyCredential { field: "password" })
        ));
    }

    #[test]
    fn test_basic_auth_debug_masks_password() {
        let auth = BasicAuthenticator::new("user", "hunter2").unwrap();
        let debug = format!("{auth:?}");
        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
    }
}
