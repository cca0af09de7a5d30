//! Error types for the catalog record model.

use thiserror::Error;

/// Error returned when a value cannot be encoded to or decoded from JSON.
///
/// # Example
///
/// ```rust
/// use global_catalog::model::{SerializationError, I18N};
///
/// let result = I18N::from_json("{ not json");
/// let error: SerializationError = result.unwrap_err();
/// assert!(error.to_string().starts_with("JSON serialization failed"));
/// ```
#[derive(Debug, Error)]
#[error("JSON serialization failed: {0}")]
pub struct SerializationError(#[from] serde_json::Error);

impl SerializationError {
    /// Returns the underlying `serde_json` error.
    #[must_use]
    pub const fn inner(&self) -> &serde_json::Error {
        &self.0
    }
}

/// Error returned when a dynamic property cannot be stored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// The key names a declared field of the record.
    #[error("'{key}' is a declared field and cannot be set as a dynamic property")]
    DeclaredField {
        /// The rejected key.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error_wraps_serde_error() {
        let source = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let error = SerializationError::from(source);

        assert!(error.inner().is_eof());
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_declared_field_message() {
        let error = PropertyError::DeclaredField {
            key: "_accountid_".to_string(),
        };
        assert!(error.to_string().contains("_accountid_"));
    }
}
