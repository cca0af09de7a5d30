//! Model-specific metadata attached to catalog entries.
//!
//! [`ObjectMetadataSet`] groups the optional metadata blocks a catalog entry
//! may carry: UI strings and URLs, service and plan attributes, templates,
//! SLAs, callbacks, pricing and deployment details.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::extensible::{DeclaredFields, ExtensibleRecord, NoFields};
use crate::model::pricing::PricingSet;

/// Model-specific metadata for a catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectMetadataSet {
    /// Whether the object is compatible with the resource controller service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rc_compatible: Option<bool>,
    /// UI-related metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<UIMetaData>,
    /// Compliance certifications.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compliance: Vec<String>,
    /// Service-related metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ObjectMetadataBaseService>,
    /// Plan-related metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<ObjectMetadataBasePlan>,
    /// Template-related metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<ObjectMetadataBaseTemplate>,
    /// Alias-related metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<ObjectMetadataBaseAlias>,
    /// Service level agreement metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla: Option<ObjectMetadataBaseSla>,
    /// Broker and dashboard callbacks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<Callbacks>,
    /// Version of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// The original name of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// Additional information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<Value>,
    /// Pricing metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingSet>,
    /// Deployment metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<DeploymentBase>,
}

/// Service-related metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadataBaseService {
    /// Type of service.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_compatible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_api_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisionable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_provisioning_supported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_unprovisioning_supported: Option<bool>,
    /// Cloud Foundry GUID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cf_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindable: Option<bool>,
    /// Services this service depends on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_updateable: Option<bool>,
    /// State of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_check_enabled: Option<bool>,
    /// Test check interval in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_check_interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_key_supported: Option<bool>,
}

/// Plan-related metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadataBasePlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_internal_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_provisioning_supported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_unprovisioning_supported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_check_interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_scope_instance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_check_enabled: Option<bool>,
    /// Cloud Foundry GUID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cf_guid: Option<String>,
}

/// Template-related metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectMetadataBaseTemplate {
    /// Services the template depends on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
    /// Default memory in megabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_memory: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cmd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ObjectMetadataBaseTemplateSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_catalog_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cf_runtime_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildpack: Option<String>,
    /// Environment variables for the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<TemplateEnvironmentVariables>,
}

/// Where a template's source code lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadataBaseTemplateSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Declared fields of [`TemplateEnvironmentVariables`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariableFields {
    /// The `_key_` entry.
    #[serde(rename = "_key_", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl DeclaredFields for EnvironmentVariableFields {
    const FIELD_NAMES: &'static [&'static str] = &["_key_"];
}

/// Template environment variables: a declared `_key_` plus any variable name.
pub type TemplateEnvironmentVariables = ExtensibleRecord<EnvironmentVariableFields, Value>;

/// Alias-related metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadataBaseAlias {
    /// Type of alias.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub alias_type: Option<String>,
    /// The plan this alias points to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
}

/// Service level agreement metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadataBaseSla {
    /// Required service level agreement terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsiveness: Option<String>,
    /// Disaster recovery information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dr: Option<ObjectMetadataBaseSlaDr>,
}

/// Disaster recovery information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadataBaseSlaDr {
    /// Whether disaster recovery is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Broker and dashboard callback URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callbacks {
    /// URL of the broker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_utl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_proxy_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_data_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_detail_tab_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_detail_tab_ext_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_monitor_api: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_monitor_app: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_staging_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_production_url: Option<String>,
}

/// Deployment metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentBase {
    /// Where the deployment lives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_crn: Option<String>,
    /// The broker serving this deployment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker: Option<DeploymentBaseBroker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_rc_migration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_network: Option<String>,
}

/// The broker serving a deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentBaseBroker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
}

/// UI-related metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UIMetaData {
    /// Language-specific UI strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strings: Option<I18N>,
    /// UI URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Urls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeddable_dashboard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeddable_dashboard_full_width: Option<bool>,
    /// Order of the navigation items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub navigation_order: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_creatable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_offering_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessible_during_provision: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_by_side_index: Option<i64>,
    /// Date and time the service will no longer be available.
    ///
    /// Values without a UTC offset (`2019-01-01T12:00:00`) are read as UTC.
    #[serde(
        default,
        with = "lenient_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_of_service_time: Option<DateTime<Utc>>,
}

/// Reads RFC 3339 date-times, falling back to offset-less ones taken as UTC.
/// Always writes RFC 3339.
mod lenient_datetime {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => {
                serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        parse(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date-time `{raw}`")))
    }

    fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
            return Some(time.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive))
    }
}

/// Language-specific UI strings keyed by locale (e.g., `en`).
pub type I18N = ExtensibleRecord<NoFields, Strings>;

/// UI strings for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strings {
    /// Presentation bullets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<Bullets>,
    /// Media items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<UIMetaMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_creatable_msg: Option<String>,
    #[serde(rename = "not_creatable__robot_msg", skip_serializing_if = "Option::is_none")]
    pub not_creatable_robot_msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup_warning_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

/// A presentation bullet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

/// A media item shown in the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UIMetaMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Where the media came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Bullets>,
}

/// UI URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Urls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_create_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_details_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_doc_url: Option<String>,
}
