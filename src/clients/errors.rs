//! Error taxonomy for Global Catalog API calls.
//!
//! Every failing call lets the caller tell "never sent", "sent but rejected"
//! and "sent and accepted but unparseable" apart:
//!
//! - [`ValidationError`]: the options failed validation; nothing was sent
//! - [`TransportError`]: the call could not be completed; no response exists
//! - [`RequestError`]: the service answered with a non-2xx status
//! - [`ResponseProcessingError`]: 2xx response whose body could not be decoded
//! - [`CatalogError`]: unified error type encompassing all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use global_catalog::CatalogError;
//!
//! match catalog.get_catalog_entry(&options).await {
//!     Ok(entry) => println!("Found: {:?}", entry.name),
//!     Err(CatalogError::Validation(e)) => println!("Fix the input: {e}"),
//!     Err(CatalogError::Request(e)) => println!("Rejected with {}: {}", e.status, e.message),
//!     Err(CatalogError::ResponseProcessing(e)) => {
//!         println!("Unreadable body: {}", e.response.text());
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::http_response::DetailedResponse;
use crate::model::SerializationError;

/// Error returned when an options value fails validation before any request
/// is built.
///
/// # Example
///
/// ```rust
/// use global_catalog::clients::ValidationError;
///
/// let error = ValidationError::MissingRequiredFields {
///     options: "getCatalogEntryOptions",
///     fields: vec!["id"],
/// };
/// assert_eq!(
///     error.to_string(),
///     "getCatalogEntryOptions is missing required field(s): id"
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No options value was supplied.
    #[error("{options} must not be null")]
    MissingOptions {
        /// The name of the options value.
        options: &'static str,
    },

    /// One or more required fields are unset.
    #[error("{options} is missing required field(s): {}", fields.join(", "))]
    MissingRequiredFields {
        /// The name of the options value.
        options: &'static str,
        /// The names of every unset required field.
        fields: Vec<&'static str>,
    },

    /// A path template placeholder had no value.
    #[error("Missing value for path parameter '{name}'")]
    MissingPathParameter {
        /// The placeholder name.
        name: String,
    },

    /// A request body was attached to a method that does not carry one.
    #[error("Cannot send a body with {method} requests.")]
    UnexpectedBody {
        /// The HTTP method of the request.
        method: String,
    },
}

/// Error returned when the service answers with a non-success status.
///
/// The raw response is always attached so callers can inspect headers and
/// the original body.
#[derive(Debug, Error)]
#[error("Request failed with status {status}: {message}")]
pub struct RequestError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The error message extracted from the body, or the status reason.
    pub message: String,
    /// The decoded error body, when it was JSON.
    pub error_body: Option<serde_json::Value>,
    /// The raw response.
    pub response: Box<DetailedResponse>,
}

/// Error returned when a success response cannot be decoded into the
/// expected shape.
#[derive(Debug, Error)]
#[error("An error occurred while processing the operation response: {source}")]
pub struct ResponseProcessingError {
    /// The underlying decoding failure.
    #[source]
    pub source: serde_json::Error,
    /// The raw response.
    pub response: Box<DetailedResponse>,
}

/// Error returned when a call could not be completed at all.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request URL could not be parsed.
    #[error("Invalid request URL '{url}'")]
    InvalidUrl {
        /// The offending URL.
        url: String,
    },

    /// A header name or value could not be encoded.
    #[error("Invalid header '{name}'")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Unified error type for all Global Catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The options value failed validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service rejected the request.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The success response body could not be decoded.
    #[error(transparent)]
    ResponseProcessing(#[from] ResponseProcessingError),

    /// The request could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A request body could not be serialized.
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

impl CatalogError {
    /// Returns the raw response, if the call produced one.
    #[must_use]
    pub fn response(&self) -> Option<&DetailedResponse> {
        match self {
            Self::Request(e) => Some(&e.response),
            Self::ResponseProcessing(e) => Some(&e.response),
            _ => None,
        }
    }

    /// Returns the HTTP status code, if the call produced a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(|response| response.status)
    }

    /// Returns `true` if the request was never sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Serialization(_))
    }
}
