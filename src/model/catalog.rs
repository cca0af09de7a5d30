//! Catalog entry models.
//!
//! A [`CatalogEntry`] is the central object of the catalog: a service,
//! plan, deployment, template or any other kind of offering.
//!
//! # Read-only fields
//!
//! Fields computed by the service (`catalog_crn`, `url`, `children_url`,
//! `geo_tags`, `pricing_tags`, `created`, `updated`) are decoded from
//! responses but never sent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::extensible::{ExtensibleRecord, NoFields};
use crate::model::metadata::ObjectMetadataSet;

/// An entry in the global catalog.
///
/// # Example
///
/// ```rust
/// use global_catalog::model::CatalogEntry;
///
/// let entry: CatalogEntry = serde_json::from_str(r#"{
///     "id": "my-service",
///     "name": "my-service",
///     "kind": "service",
///     "tags": ["ibm_created"],
///     "created": "2020-01-01T00:00:00Z"
/// }"#).unwrap();
///
/// assert_eq!(entry.kind.as_deref(), Some("service"));
///
/// let json = serde_json::to_value(&entry).unwrap();
/// assert!(json.get("created").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Programmatic name for this catalog entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The type of catalog entry (e.g., `service`, `template`, `dashboard`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Translated overview text, keyed by locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview_ui: Option<OverviewUI>,
    /// Image URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Image>,
    /// The ID of the parent entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Whether the entry is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Search tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Whether the entry is a group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<bool>,
    /// Information about the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    /// Whether the entry is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Model-specific metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMetadataSet>,
    /// Catalog entry ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// CRN of the entry.
    #[serde(default, skip_serializing)]
    pub catalog_crn: Option<Value>,
    /// URL to get details about the entry.
    #[serde(default, skip_serializing)]
    pub url: Option<Value>,
    /// URL to get details about the entry's children.
    #[serde(default, skip_serializing)]
    pub children_url: Option<Value>,
    /// Geographic tags.
    #[serde(default, skip_serializing)]
    pub geo_tags: Option<Value>,
    /// Pricing tags.
    #[serde(default, skip_serializing)]
    pub pricing_tags: Option<Value>,
    /// Creation time, as sent by the service (usually an RFC 3339 string).
    #[serde(default, skip_serializing)]
    pub created: Option<Value>,
    /// Last update time, as sent by the service.
    #[serde(default, skip_serializing)]
    pub updated: Option<Value>,
}

/// Image URLs for a catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// URL of the main image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_image: Option<String>,
}

impl Image {
    /// Creates an image set with only the main image.
    #[must_use]
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            ..Self::default()
        }
    }
}

/// The provider of a catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Provider {
    /// Creates a provider with its required email and name.
    #[must_use]
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Translated overview text for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    /// The translated display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// The translated long description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// The translated description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Overview {
    /// Creates an overview with all three texts.
    #[must_use]
    pub fn new(
        display_name: impl Into<String>,
        long_description: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            display_name: Some(display_name.into()),
            long_description: Some(long_description.into()),
            description: Some(description.into()),
        }
    }
}

/// Overview text keyed by locale (e.g., `en`).
pub type OverviewUI = ExtensibleRecord<NoFields, Overview>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overview_ui_is_keyed_by_locale() {
        let mut overview = OverviewUI::new();
        overview
            .set_property("en", Overview::new("Name", "Long", "Short"))
            .unwrap();

        let value = serde_json::to_value(&overview).unwrap();

        assert_eq!(
            value,
            json!({"en": {"display_name": "Name", "long_description": "Long", "description": "Short"}})
        );
    }

    #[test]
    fn test_read_only_fields_are_decoded_not_encoded() {
        let entry: CatalogEntry = serde_json::from_value(json!({
            "id": "svc",
            "catalog_crn": "crn:v1:bluemix:public:globalcatalog::::service:svc",
            "url": "https://globalcatalog.cloud.ibm.com/api/v1/svc",
            "geo_tags": ["us-south"],
            "updated": "2021-06-01T10:20:30.123Z"
        }))
        .unwrap();

        assert_eq!(entry.geo_tags, Some(json!(["us-south"])));
        assert_eq!(entry.updated, Some(json!("2021-06-01T10:20:30.123Z")));

        let encoded = serde_json::to_value(&entry).unwrap();
        assert_eq!(encoded, json!({"id": "svc"}));
    }

    #[test]
    fn test_timestamps_accept_any_json_shape() {
        let entry: CatalogEntry = serde_json::from_value(json!({
            "id": "svc",
            "created": {"anyKey": "anyValue"},
            "updated": 1_622_542_830
        }))
        .unwrap();

        assert_eq!(entry.created, Some(json!({"anyKey": "anyValue"})));
        assert_eq!(entry.updated, Some(json!(1_622_542_830)));
    }

    #[test]
    fn test_entry_with_nested_objects() {
        let entry: CatalogEntry = serde_json::from_value(json!({
            "name": "svc",
            "kind": "service",
            "overview_ui": {"en": {"display_name": "Svc", "description": "d", "long_description": "ld"}},
            "images": {"image": "https://img/1.png"},
            "disabled": false,
            "tags": ["a", "b"],
            "provider": {"email": "p@example.com", "name": "P"},
            "metadata": {"rc_compatible": true, "ui": {"strings": {"en": {"bullets": [{"title": "t"}]}}}}
        }))
        .unwrap();

        let overview = entry.overview_ui.as_ref().unwrap().get_property("en").unwrap();
        assert_eq!(overview.display_name.as_deref(), Some("Svc"));
        assert_eq!(entry.images, Some(Image::new("https://img/1.png")));
        assert_eq!(entry.provider, Some(Provider::new("p@example.com", "P")));
        assert_eq!(entry.tags, vec!["a", "b"]);

        let strings = entry
            .metadata
            .and_then(|m| m.ui)
            .and_then(|ui| ui.strings)
            .unwrap();
        let en = strings.get_property("en").unwrap();
        assert_eq!(en.bullets[0].title.as_deref(), Some("t"));
    }
}
