//! Path building infrastructure for catalog operations.
//!
//! Every operation is described by a constant [`OperationPath`]: its HTTP
//! method, its analytics operation id, a URL template and the kind of
//! response it produces.
//!
//! # Path Templates
//!
//! Templates use `{name}` placeholders for path parameters:
//! - `/{id}` - Single parameter
//! - `/{object_id}/artifacts/{artifact_id}` - Multiple parameters
//!
//! Each substituted value is percent-encoded as a single path segment.
//!
//! # Example
//!
//! ```rust
//! use global_catalog::clients::HttpMethod;
//! use global_catalog::rest::{build_path, OperationPath, ResponseKind};
//!
//! const GET_ARTIFACT: OperationPath = OperationPath::new(
//!     HttpMethod::Get,
//!     "GetArtifact",
//!     "/{object_id}/artifacts/{artifact_id}",
//!     ResponseKind::Binary,
//! );
//!
//! let path = build_path(
//!     GET_ARTIFACT.template,
//!     &[("object_id", "my service"), ("artifact_id", "readme.md")],
//! )
//! .unwrap();
//! assert_eq!(path, "/my%20service/artifacts/readme.md");
//! ```

use crate::clients::{HttpMethod, ValidationError, JSON_CONTENT_TYPE};

/// The shape of a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// A JSON document decoded into a typed value.
    Json,
    /// Opaque bytes returned as-is.
    Binary,
    /// No meaningful body; only status and headers are returned.
    NoContent,
}

impl ResponseKind {
    /// Returns the `Accept` header value for this response kind, if one is sent.
    #[must_use]
    pub const fn accept(&self) -> Option<&'static str> {
        match self {
            Self::Json => Some(JSON_CONTENT_TYPE),
            Self::Binary | Self::NoContent => None,
        }
    }
}

/// A path configuration for one catalog operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationPath {
    /// The HTTP method for this operation.
    pub http_method: HttpMethod,
    /// The operation id reported in the analytics header.
    pub operation_id: &'static str,
    /// The URL template with `{name}` placeholders, relative to the service URL.
    pub template: &'static str,
    /// The response shape.
    pub response: ResponseKind,
}

impl OperationPath {
    /// Creates a new `OperationPath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation_id: &'static str,
        template: &'static str,
        response: ResponseKind,
    ) -> Self {
        Self {
            http_method,
            operation_id,
            template,
            response,
        }
    }

    /// Returns the placeholder names of the template in order.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.template;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }
}

/// Builds a path from a template by substituting percent-encoded values.
///
/// # Errors
///
/// Returns [`ValidationError::MissingPathParameter`] if a placeholder has no
/// value in `params`.
pub fn build_path(template: &str, params: &[(&str, &str)]) -> Result<String, ValidationError> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            result.push_str(&rest[start..]);
            return Ok(result);
        };
        let name = &after[..end];
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| ValidationError::MissingPathParameter {
                name: name.to_string(),
            })?;
        result.push_str(&urlencoding::encode(value));
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    Ok(result)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResponseKind>();
    assert_send_sync::<OperationPath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_path_stores_fields_correctly() {
        let path = OperationPath::new(
            HttpMethod::Put,
            "UploadArtifact",
            "/{object_id}/artifacts/{artifact_id}",
            ResponseKind::NoContent,
        );

        assert_eq!(path.http_method, HttpMethod::Put);
        assert_eq!(path.operation_id, "UploadArtifact");
        assert_eq!(path.response, ResponseKind::NoContent);
        assert_eq!(path.placeholders(), vec!["object_id", "artifact_id"]);
    }

    #[test]
    fn test_placeholders_of_root_path() {
        let path = OperationPath::new(HttpMethod::Get, "ListCatalogEntries", "/", ResponseKind::Json);
        assert!(path.placeholders().is_empty());
    }

    #[test]
    fn test_build_path_single_param() {
        let result = build_path("/{id}", &[("id", "my-service")]).unwrap();
        assert_eq!(result, "/my-service");
    }

    #[test]
    fn test_build_path_multiple_params_any_order() {
        let result = build_path(
            "/{id}/{kind}",
            &[("kind", "plan"), ("id", "svc")],
        )
        .unwrap();
        assert_eq!(result, "/svc/plan");
    }

    #[test]
    fn test_build_path_encodes_each_segment() {
        let result = build_path("/{id}/pricing", &[("id", "a/b c")]).unwrap();
        assert_eq!(result, "/a%2Fb%20c/pricing");
    }

    #[test]
    fn test_build_path_reports_unresolved_placeholder() {
        let result = build_path("/{object_id}/artifacts/{artifact_id}", &[("object_id", "x")]);
        assert_eq!(
            result,
            Err(ValidationError::MissingPathParameter {
                name: "artifact_id".to_string()
            })
        );
    }

    #[test]
    fn test_response_kind_accept_header() {
        assert_eq!(ResponseKind::Json.accept(), Some("application/json"));
        assert_eq!(ResponseKind::Binary.accept(), None);
        assert_eq!(ResponseKind::NoContent.accept(), None);
    }
}
