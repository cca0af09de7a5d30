//! Artifact models.

use serde::{Deserialize, Serialize};

/// Metadata of one artifact attached to a catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// The artifact's file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Last update time, as sent by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// URL to download the artifact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

/// The artifacts attached to a catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifacts {
    /// Number of artifacts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Artifact>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifacts_decode() {
        let artifacts: Artifacts = serde_json::from_str(
            r#"{"count": 1, "resources": [{"name": "readme.md", "etag": "e1", "size": 42}]}"#,
        )
        .unwrap();

        assert_eq!(artifacts.count, Some(1));
        assert_eq!(artifacts.resources[0].name.as_deref(), Some("readme.md"));
        assert_eq!(artifacts.resources[0].size, Some(42));
    }

    #[test]
    fn test_empty_artifacts() {
        let artifacts: Artifacts = serde_json::from_str("{}").unwrap();
        assert!(artifacts.resources.is_empty());
        assert_eq!(serde_json::to_string(&artifacts).unwrap(), "{}");
    }
}
