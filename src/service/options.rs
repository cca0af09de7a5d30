//! Per-operation options.
//!
//! One struct per [`GlobalCatalog`](crate::service::GlobalCatalog)
//! operation. Each can be built with struct syntax and `Default`, or with
//! `new(required...)` and the fluent `with_*` setters. Required fields are
//! still `Option`s so that an incomplete value is caught by validation
//! rather than by the type system alone.
//!
//! # Example
//!
//! ```rust
//! use global_catalog::service::GetCatalogEntryOptions;
//!
//! let options = GetCatalogEntryOptions::new("my-service")
//!     .with_account("global")
//!     .with_complete(true)
//!     .with_depth(2)
//!     .with_header("X-Request-Tag", "docs");
//!
//! assert_eq!(options.id.as_deref(), Some("my-service"));
//! assert_eq!(options.headers.get("X-Request-Tag").map(String::as_str), Some("docs"));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clients::RequestBody;
use crate::model::{
    CatalogEntry, Image, ObjectMetadataSet, OverviewUI, Provider, SerializationError,
    VisibilityDetail,
};
use crate::rest::{OperationOptions, QueryParams};

/// Pushes the name of every unset required field.
fn require(missing: &mut Vec<&'static str>, name: &'static str, is_set: bool) {
    if !is_set {
        missing.push(name);
    }
}

/// Collects the path parameters that are set.
fn path_params<'a>(params: &[(&'static str, Option<&'a String>)]) -> Vec<(&'static str, &'a str)> {
    params
        .iter()
        .filter_map(|(name, value)| value.map(|value| (*name, value.as_str())))
        .collect()
}

/// The JSON body shared by create and update.
#[derive(Serialize)]
struct EntryBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overview_ui: Option<&'a OverviewUI>,
    #[serde(skip_serializing_if = "Option::is_none")]
    images: Option<&'a Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<&'a Provider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a ObjectMetadataSet>,
}

// ---------------------------------------------------------------------------
// Catalog entries
// ---------------------------------------------------------------------------

/// Options for [`list_catalog_entries`](crate::service::GlobalCatalog::list_catalog_entries).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCatalogEntriesOptions {
    /// Account to search in; `global` for the public catalog.
    pub account: Option<String>,
    /// Fields to include, separated by `:` (e.g., `metadata:pricing`).
    pub include: Option<String>,
    /// Search query.
    pub q: Option<String>,
    /// Field to sort by.
    pub sort_by: Option<String>,
    /// Sort in descending order.
    pub descending: Option<bool>,
    /// Languages to return, separated by `,`.
    pub languages: Option<String>,
    /// Whether to return the complete object, including internal fields.
    pub complete: Option<bool>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl ListCatalogEntriesOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    #[must_use]
    pub fn with_q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    #[must_use]
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    #[must_use]
    pub fn with_descending(mut self, descending: bool) -> Self {
        self.descending = Some(descending);
        self
    }

    #[must_use]
    pub fn with_languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = Some(languages.into());
        self
    }

    #[must_use]
    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for ListCatalogEntriesOptions {
    const OPTIONS_NAME: &'static str = "listCatalogEntriesOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query.push_opt("include", self.include.as_deref());
        query.push_opt("q", self.q.as_deref());
        query.push_opt("sort-by", self.sort_by.as_deref());
        query.push_opt("descending", self.descending);
        query.push_opt("languages", self.languages.as_deref());
        query.push_opt("complete", self.complete);
        query
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Options for [`create_catalog_entry`](crate::service::GlobalCatalog::create_catalog_entry).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCatalogEntryOptions {
    /// Programmatic name for the entry.
    pub name: Option<String>,
    /// The type of entry (e.g., `service`, `plan`, `deployment`).
    pub kind: Option<String>,
    /// Translated overview text keyed by locale.
    pub overview_ui: Option<OverviewUI>,
    /// Image URLs for the entry.
    pub images: Option<Image>,
    /// Whether the entry is disabled.
    pub disabled: Option<bool>,
    /// Tags used for search.
    pub tags: Option<Vec<String>>,
    /// Information about the provider.
    pub provider: Option<Provider>,
    /// Catalog entry ID.
    pub id: Option<String>,
    /// ID of the parent entry.
    pub parent_id: Option<String>,
    /// Whether the entry is a group.
    pub group: Option<bool>,
    /// Whether the entry is active.
    pub active: Option<bool>,
    /// Model-specific metadata.
    pub metadata: Option<ObjectMetadataSet>,
    /// Account to act in; `global` for the public catalog.
    pub account: Option<String>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl CreateCatalogEntryOptions {
    /// Creates options with every required field set.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        overview_ui: OverviewUI,
        images: Image,
        disabled: bool,
        tags: Vec<String>,
        provider: Provider,
        id: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some(kind.into()),
            overview_ui: Some(overview_ui),
            images: Some(images),
            disabled: Some(disabled),
            tags: Some(tags),
            provider: Some(provider),
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Creates options from an existing entry, copying its writable fields.
    #[must_use]
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.clone(),
            kind: entry.kind.clone(),
            overview_ui: entry.overview_ui.clone(),
            images: entry.images.clone(),
            disabled: entry.disabled,
            tags: Some(entry.tags.clone()),
            provider: entry.provider.clone(),
            id: entry.id.clone(),
            parent_id: entry.parent_id.clone(),
            group: entry.group,
            active: entry.active,
            metadata: entry.metadata.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: bool) -> Self {
        self.group = Some(group);
        self
    }

    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: ObjectMetadataSet) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for CreateCatalogEntryOptions {
    const OPTIONS_NAME: &'static str = "createCatalogEntryOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "name", self.name.is_some());
        require(&mut missing, "kind", self.kind.is_some());
        require(&mut missing, "overview_ui", self.overview_ui.is_some());
        require(&mut missing, "images", self.images.is_some());
        require(&mut missing, "disabled", self.disabled.is_some());
        require(&mut missing, "tags", self.tags.is_some());
        require(&mut missing, "provider", self.provider.is_some());
        require(&mut missing, "id", self.id.is_some());
        missing
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query
    }

    fn body(&self) -> Result<Option<RequestBody>, SerializationError> {
        let body = EntryBody {
            name: self.name.as_ref(),
            kind: self.kind.as_ref(),
            overview_ui: self.overview_ui.as_ref(),
            images: self.images.as_ref(),
            disabled: self.disabled,
            tags: self.tags.as_ref(),
            provider: self.provider.as_ref(),
            id: self.id.as_ref(),
            parent_id: self.parent_id.as_ref(),
            group: self.group,
            active: self.active,
            metadata: self.metadata.as_ref(),
        };
        RequestBody::json(&body).map(Some)
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Options for [`get_catalog_entry`](crate::service::GlobalCatalog::get_catalog_entry).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCatalogEntryOptions {
    /// Catalog entry ID.
    pub id: Option<String>,
    /// Account to act in; `global` for the public catalog.
    pub account: Option<String>,
    /// Fields to include, separated by `:` (e.g., `metadata:pricing`).
    pub include: Option<String>,
    /// Languages to return, separated by `,`.
    pub languages: Option<String>,
    /// Whether to return the complete object, including internal fields.
    pub complete: Option<bool>,
    /// How many levels of children to return.
    pub depth: Option<i64>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl GetCatalogEntryOptions {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    #[must_use]
    pub fn with_languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = Some(languages.into());
        self
    }

    #[must_use]
    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }

    #[must_use]
    pub fn with_depth(mut self, depth: i64) -> Self {
        self.depth = Some(depth);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for GetCatalogEntryOptions {
    const OPTIONS_NAME: &'static str = "getCatalogEntryOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "id", self.id.is_some());
        missing
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        path_params(&[("id", self.id.as_ref())])
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query.push_opt("include", self.include.as_deref());
        query.push_opt("languages", self.languages.as_deref());
        query.push_opt("complete", self.complete);
        query.push_opt("depth", self.depth);
        query
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Options for [`update_catalog_entry`](crate::service::GlobalCatalog::update_catalog_entry).
///
/// The `id` selects the entry and is not part of the body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCatalogEntryOptions {
    /// Catalog entry ID.
    pub id: Option<String>,
    /// Programmatic name for the entry.
    pub name: Option<String>,
    /// The type of entry (e.g., `service`, `plan`, `deployment`).
    pub kind: Option<String>,
    /// Translated overview text keyed by locale.
    pub overview_ui: Option<OverviewUI>,
    /// Image URLs for the entry.
    pub images: Option<Image>,
    /// Whether the entry is disabled.
    pub disabled: Option<bool>,
    /// Tags used for search.
    pub tags: Option<Vec<String>>,
    /// Information about the provider.
    pub provider: Option<Provider>,
    /// ID of the parent entry.
    pub parent_id: Option<String>,
    /// Whether the entry is a group.
    pub group: Option<bool>,
    /// Whether the entry is active.
    pub active: Option<bool>,
    /// Model-specific metadata.
    pub metadata: Option<ObjectMetadataSet>,
    /// Account to act in; `global` for the public catalog.
    pub account: Option<String>,
    /// Reparenting object. `true` moves the entry under `parent_id`.
    pub move_entry: Option<bool>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl UpdateCatalogEntryOptions {
    /// Creates options with every required field set.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        overview_ui: OverviewUI,
        images: Image,
        disabled: bool,
        tags: Vec<String>,
        provider: Provider,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            kind: Some(kind.into()),
            overview_ui: Some(overview_ui),
            images: Some(images),
            disabled: Some(disabled),
            tags: Some(tags),
            provider: Some(provider),
            ..Self::default()
        }
    }

    /// Creates options from an existing entry, copying its writable fields.
    #[must_use]
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            kind: entry.kind.clone(),
            overview_ui: entry.overview_ui.clone(),
            images: entry.images.clone(),
            disabled: entry.disabled,
            tags: Some(entry.tags.clone()),
            provider: entry.provider.clone(),
            parent_id: entry.parent_id.clone(),
            group: entry.group,
            active: entry.active,
            metadata: entry.metadata.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: bool) -> Self {
        self.group = Some(group);
        self
    }

    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: ObjectMetadataSet) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_move(mut self, move_entry: bool) -> Self {
        self.move_entry = Some(move_entry);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for UpdateCatalogEntryOptions {
    const OPTIONS_NAME: &'static str = "updateCatalogEntryOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "id", self.id.is_some());
        require(&mut missing, "name", self.name.is_some());
        require(&mut missing, "kind", self.kind.is_some());
        require(&mut missing, "overview_ui", self.overview_ui.is_some());
        require(&mut missing, "images", self.images.is_some());
        require(&mut missing, "disabled", self.disabled.is_some());
        require(&mut missing, "tags", self.tags.is_some());
        require(&mut missing, "provider", self.provider.is_some());
        missing
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        path_params(&[("id", self.id.as_ref())])
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query.push_opt("move", self.move_entry);
        query
    }

    fn body(&self) -> Result<Option<RequestBody>, SerializationError> {
        let body = EntryBody {
            name: self.name.as_ref(),
            kind: self.kind.as_ref(),
            overview_ui: self.overview_ui.as_ref(),
            images: self.images.as_ref(),
            disabled: self.disabled,
            tags: self.tags.as_ref(),
            provider: self.provider.as_ref(),
            id: None,
            parent_id: self.parent_id.as_ref(),
            group: self.group,
            active: self.active,
            metadata: self.metadata.as_ref(),
        };
        RequestBody::json(&body).map(Some)
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}


/// Options for [`delete_catalog_entry`](crate::service::GlobalCatalog::delete_catalog_entry).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteCatalogEntryOptions {
    /// Catalog entry ID.
    pub id: Option<String>,
    /// Account to act in; `global` for the public catalog.
    pub account: Option<String>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl DeleteCatalogEntryOptions {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for DeleteCatalogEntryOptions {
    const OPTIONS_NAME: &'static str = "deleteCatalogEntryOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "id", self.id.is_some());
        missing
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        path_params(&[("id", self.id.as_ref())])
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Options for [`get_child_objects`](crate::service::GlobalCatalog::get_child_objects).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetChildObjectsOptions {
    /// Parent catalog entry ID.
    pub id: Option<String>,
    /// Kind of child to return (e.g., `plan`, or `*` for all).
    pub kind: Option<String>,
    /// Account to act in; `global` for the public catalog.
    pub account: Option<String>,
    /// Fields to include, separated by `:` (e.g., `metadata:pricing`).
    pub include: Option<String>,
    /// Search query.
    pub q: Option<String>,
    /// Field to sort by.
    pub sort_by: Option<String>,
    /// Sort in descending order.
    pub descending: Option<bool>,
    /// Languages to return, separated by `,`.
    pub languages: Option<String>,
    /// Whether to return the complete object, including internal fields.
    pub complete: Option<bool>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl GetChildObjectsOptions {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    #[must_use]
    pub fn with_q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    #[must_use]
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    #[must_use]
    pub fn with_descending(mut self, descending: bool) -> Self {
        self.descending = Some(descending);
        self
    }

    #[must_use]
    pub fn with_languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = Some(languages.into());
        self
    }

    #[must_use]
    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for GetChildObjectsOptions {
    const OPTIONS_NAME: &'static str = "getChildObjectsOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "id", self.id.is_some());
        require(&mut missing, "kind", self.kind.is_some());
        missing
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        path_params(&[("id", self.id.as_ref()), ("kind", self.kind.as_ref())])
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query.push_opt("include", self.include.as_deref());
        query.push_opt("q", self.q.as_deref());
        query.push_opt("sort-by", self.sort_by.as_deref());
        query.push_opt("descending", self.descending);
        query.push_opt("languages", self.languages.as_deref());
        query.push_opt("complete", self.complete);
        query
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Options for [`restore_catalog_entry`](crate::service::GlobalCatalog::restore_catalog_entry).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreCatalogEntryOptions {
    /// Catalog entry ID.
    pub id: Option<String>,
    /// Account to act in; `global` for the public catalog.
    pub account: Option<String>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl RestoreCatalogEntryOptions {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for RestoreCatalogEntryOptions {
    const OPTIONS_NAME: &'static str = "restoreCatalogEntryOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "id", self.id.is_some());
        missing
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        path_params(&[("id", self.id.as_ref())])
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

// ---------------------------------------------------------------------------
// Visibility and pricing
// ---------------------------------------------------------------------------

/// Options for [`get_visibility`](crate::service::GlobalCatalog::get_visibility).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetVisibilityOptions {
    /// Catalog entry ID.
    pub id: Option<String>,
    /// Account to act in; `global` for the public catalog.
    pub account: Option<String>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl GetVisibilityOptions {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for GetVisibilityOptions {
    const OPTIONS_NAME: &'static str = "getVisibilityOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "id", self.id.is_some());
        missing
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        path_params(&[("id", self.id.as_ref())])
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// The JSON body of a visibility update.
#[derive(Serialize)]
struct VisibilityBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    include: Option<&'a VisibilityDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude: Option<&'a VisibilityDetail>,
}

/// Options for [`update_visibility`](crate::service::GlobalCatalog::update_visibility).
///
/// The body is always sent, as `{}` when neither list is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateVisibilityOptions {
    /// Catalog entry ID.
    pub id: Option<String>,
    /// Accounts to grant visibility to.
    pub include: Option<VisibilityDetail>,
    /// Accounts to hide the entry from.
    pub exclude: Option<VisibilityDetail>,
    /// Account to act in; `global` for the public catalog.
    pub account: Option<String>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl UpdateVisibilityOptions {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_include(mut self, include: VisibilityDetail) -> Self {
        self.include = Some(include);
        self
    }

    #[must_use]
    pub fn with_exclude(mut self, exclude: VisibilityDetail) -> Self {
        self.exclude = Some(exclude);
        self
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for UpdateVisibilityOptions {
    const OPTIONS_NAME: &'static str = "updateVisibilityOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "id", self.id.is_some());
        missing
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        path_params(&[("id", self.id.as_ref())])
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query
    }

    fn body(&self) -> Result<Option<RequestBody>, SerializationError> {
        let body = VisibilityBody {
            include: self.include.as_ref(),
            exclude: self.exclude.as_ref(),
        };
        RequestBody::json(&body).map(Some)
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Options for [`get_pricing`](crate::service::GlobalCatalog::get_pricing).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPricingOptions {
    /// Catalog entry ID.
    pub id: Option<String>,
    /// Account to act in; `global` for the public catalog.
    pub account: Option<String>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl GetPricingOptions {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for GetPricingOptions {
    const OPTIONS_NAME: &'static str = "getPricingOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "id", self.id.is_some());
        missing
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        path_params(&[("id", self.id.as_ref())])
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Options for [`get_audit_logs`](crate::service::GlobalCatalog::get_audit_logs).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAuditLogsOptions {
    /// Catalog entry ID.
    pub id: Option<String>,
    /// Account to act in; `global` for the public catalog.
    pub account: Option<String>,
    /// Sort oldest first.
    pub ascending: Option<bool>,
    /// Only return entries logged at or after this time.
    pub startat: Option<DateTime<Utc>>,
    /// Index of the first record to return.
    pub offset: Option<i64>,
    /// Maximum number of records to return.
    pub limit: Option<i64>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl GetAuditLogsOptions {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_ascending(mut self, ascending: bool) -> Self {
        self.ascending = Some(ascending);
        self
    }

    #[must_use]
    pub fn with_startat(mut self, startat: DateTime<Utc>) -> Self {
        self.startat = Some(startat);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for GetAuditLogsOptions {
    const OPTIONS_NAME: &'static str = "getAuditLogsOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "id", self.id.is_some());
        missing
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        path_params(&[("id", self.id.as_ref())])
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query.push_opt("ascending", self.ascending);
        query.push_datetime("startat", self.startat.as_ref());
        query.push_opt("_offset", self.offset);
        query.push_opt("_limit", self.limit);
        query
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

// ---------------------------------------------------------------------------
// Artifacts
// ---------------------------------------------------------------------------

/// Options for [`list_artifacts`](crate::service::GlobalCatalog::list_artifacts).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArtifactsOptions {
    /// Catalog entry ID.
    pub object_id: Option<String>,
    /// Account to act in; `global` for the public catalog.
    pub account: Option<String>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl ListArtifactsOptions {
    #[must_use]
    pub fn new(object_id: impl Into<String>) -> Self {
        Self {
            object_id: Some(object_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for ListArtifactsOptions {
    const OPTIONS_NAME: &'static str = "listArtifactsOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "object_id", self.object_id.is_some());
        missing
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        path_params(&[("object_id", self.object_id.as_ref())])
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Options for [`get_artifact`](crate::service::GlobalCatalog::get_artifact).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetArtifactOptions {
    /// Catalog entry ID.
    pub object_id: Option<String>,
    /// Artifact file name.
    pub artifact_id: Option<String>,
    /// Account to act in; `global` for the public catalog.
    pub account: Option<String>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl GetArtifactOptions {
    #[must_use]
    pub fn new(object_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            object_id: Some(object_id.into()),
            artifact_id: Some(artifact_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for GetArtifactOptions {
    const OPTIONS_NAME: &'static str = "getArtifactOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "object_id", self.object_id.is_some());
        require(&mut missing, "artifact_id", self.artifact_id.is_some());
        missing
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        path_params(&[
            ("object_id", self.object_id.as_ref()),
            ("artifact_id", self.artifact_id.as_ref()),
        ])
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Options for [`upload_artifact`](crate::service::GlobalCatalog::upload_artifact).
///
/// Without `artifact` the request carries no body, but a set
/// `content_type` is still sent as the `Content-Type` header. With an
/// artifact, `content_type` defaults to `application/octet-stream`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadArtifactOptions {
    /// Catalog entry ID.
    pub object_id: Option<String>,
    /// Artifact file name.
    pub artifact_id: Option<String>,
    /// The artifact bytes.
    pub artifact: Option<Vec<u8>>,
    /// Content type of the artifact.
    pub content_type: Option<String>,
    /// Account to act in; `global` for the public catalog.
    pub account: Option<String>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl UploadArtifactOptions {
    #[must_use]
    pub fn new(object_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            object_id: Some(object_id.into()),
            artifact_id: Some(artifact_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_artifact(mut self, artifact: impl Into<Vec<u8>>) -> Self {
        self.artifact = Some(artifact.into());
        self
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for UploadArtifactOptions {
    const OPTIONS_NAME: &'static str = "uploadArtifactOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "object_id", self.object_id.is_some());
        require(&mut missing, "artifact_id", self.artifact_id.is_some());
        missing
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        path_params(&[
            ("object_id", self.object_id.as_ref()),
            ("artifact_id", self.artifact_id.as_ref()),
        ])
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query
    }

    fn body(&self) -> Result<Option<RequestBody>, SerializationError> {
        Ok(self.artifact.as_ref().map(|data| RequestBody::Binary {
            content_type: self.content_type.clone(),
            data: data.clone(),
        }))
    }

    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Options for [`delete_artifact`](crate::service::GlobalCatalog::delete_artifact).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteArtifactOptions {
    /// Catalog entry ID.
    pub object_id: Option<String>,
    /// Artifact file name.
    pub artifact_id: Option<String>,
    /// Account to act in; `global` for the public catalog.
    pub account: Option<String>,
    /// Extra headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl DeleteArtifactOptions {
    #[must_use]
    pub fn new(object_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            object_id: Some(object_id.into()),
            artifact_id: Some(artifact_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl OperationOptions for DeleteArtifactOptions {
    const OPTIONS_NAME: &'static str = "deleteArtifactOptions";

    fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "object_id", self.object_id.is_some());
        require(&mut missing, "artifact_id", self.artifact_id.is_some());
        missing
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        path_params(&[
            ("object_id", self.object_id.as_ref()),
            ("artifact_id", self.artifact_id.as_ref()),
        ])
    }

    fn query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("account", self.account.as_deref());
        query
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccountFields, Overview, VisibilityDetailAccounts};
    use chrono::TimeZone;
    use serde_json::json;

    fn overview() -> OverviewUI {
        OverviewUI::new()
            .with_property("en", Overview::new("Svc", "Long", "Short"))
            .unwrap()
    }

    fn body_json(body: Option<RequestBody>) -> serde_json::Value {
        match body {
            Some(RequestBody::Json(value)) => value,
            other => panic!("expected a JSON body, got {other:?}"),
        }
    }

    #[test]
    fn test_create_reports_every_missing_required_field() {
        let options = CreateCatalogEntryOptions::default();

        assert_eq!(
            options.missing_required_fields(),
            vec!["name", "kind", "overview_ui", "images", "disabled", "tags", "provider", "id"]
        );
    }

    #[test]
    fn test_create_body_contains_only_set_fields() {
        let options = CreateCatalogEntryOptions::new(
            "svc",
            "service",
            overview(),
            Image::new("https://img/1.png"),
            false,
            vec!["a".to_string()],
            Provider::new("p@example.com", "P"),
            "svc-id",
        )
        .with_account("acct");

        assert!(options.missing_required_fields().is_empty());
        assert_eq!(
            body_json(options.body().unwrap()),
            json!({
                "name": "svc",
                "kind": "service",
                "overview_ui": {"en": {"display_name": "Svc", "long_description": "Long", "description": "Short"}},
                "images": {"image": "https://img/1.png"},
                "disabled": false,
                "tags": ["a"],
                "provider": {"email": "p@example.com", "name": "P"},
                "id": "svc-id"
            })
        );
        assert_eq!(options.query_params().get("account"), Some("acct"));
    }

    #[test]
    fn test_update_sends_move_and_keeps_id_out_of_body() {
        let options = UpdateCatalogEntryOptions::new(
            "svc-id",
            "svc",
            "service",
            overview(),
            Image::new("https://img/1.png"),
            true,
            Vec::new(),
            Provider::new("p@example.com", "P"),
        )
        .with_parent_id("parent")
        .with_move(true);

        let body = body_json(options.body().unwrap());
        assert!(body.get("id").is_none());
        assert_eq!(body["parent_id"], json!("parent"));
        assert_eq!(body["tags"], json!([]));
        assert_eq!(options.query_params().get("move"), Some("true"));
        assert_eq!(options.path_params(), vec![("id", "svc-id")]);
    }

    #[test]
    fn test_update_from_entry_copies_writable_fields() {
        let entry = CatalogEntry {
            id: Some("svc-id".to_string()),
            name: Some("svc".to_string()),
            kind: Some("service".to_string()),
            overview_ui: Some(overview()),
            images: Some(Image::new("i")),
            disabled: Some(false),
            provider: Some(Provider::new("e", "n")),
            ..CatalogEntry::default()
        };

        let options = UpdateCatalogEntryOptions::from_entry(&entry);

        assert!(options.missing_required_fields().is_empty());
    }

    #[test]
    fn test_list_query_uses_wire_names() {
        let options = ListCatalogEntriesOptions::new()
            .with_sort_by("name")
            .with_descending(true)
            .with_q("kind:service");
        let query = options.query_params();

        assert_eq!(query.get("sort-by"), Some("name"));
        assert_eq!(query.get("descending"), Some("true"));
        assert_eq!(query.get("q"), Some("kind:service"));
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn test_child_objects_need_id_and_kind() {
        let options = GetChildObjectsOptions {
            id: Some("svc".to_string()),
            ..Default::default()
        };

        assert_eq!(options.missing_required_fields(), vec!["kind"]);
    }

    #[test]
    fn test_audit_log_query() {
        let options = GetAuditLogsOptions::new("svc")
            .with_ascending(false)
            .with_startat(Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap())
            .with_offset(20)
            .with_limit(10);
        let query = options.query_params();

        assert_eq!(query.get("ascending"), Some("false"));
        assert_eq!(query.get("startat"), Some("2021-03-04T05:06:07Z"));
        assert_eq!(query.get("_offset"), Some("20"));
        assert_eq!(query.get("_limit"), Some("10"));
    }

    #[test]
    fn test_update_visibility_body() {
        let accounts = VisibilityDetailAccounts::with_fields(AccountFields {
            accountid: Some("abc".to_string()),
        });
        let options = UpdateVisibilityOptions::new("svc").with_include(VisibilityDetail::new(accounts));

        assert_eq!(
            body_json(options.body().unwrap()),
            json!({"include": {"accounts": {"_accountid_": "abc"}}})
        );
        assert_eq!(
            body_json(UpdateVisibilityOptions::new("svc").body().unwrap()),
            json!({})
        );
    }

    #[test]
    fn test_upload_body_is_binary() {
        let options = UploadArtifactOptions::new("svc", "readme.md")
            .with_artifact(b"# hello".to_vec())
            .with_content_type("text/markdown");

        assert_eq!(
            options.body().unwrap(),
            Some(RequestBody::Binary {
                content_type: Some("text/markdown".to_string()),
                data: b"# hello".to_vec(),
            })
        );
        assert_eq!(UploadArtifactOptions::new("svc", "x").body().unwrap(), None);
    }

    #[test]
    fn test_upload_content_type_is_sent_without_artifact() {
        use crate::clients::HttpMethod;
        use crate::rest::{build_request, OperationPath, ResponseKind};

        const UPLOAD: OperationPath = OperationPath::new(
            HttpMethod::Put,
            "UploadArtifact",
            "/{object_id}/artifacts/{artifact_id}",
            ResponseKind::NoContent,
        );
        let options = UploadArtifactOptions::new("svc", "x").with_content_type("text/plain");

        let request = build_request("https://catalog.test/api/v1", &UPLOAD, Some(&options)).unwrap();

        assert!(request.body.is_none());
        assert_eq!(request.header("Content-Type"), Some("text/plain"));

        let untyped = UploadArtifactOptions::new("svc", "x");
        let request = build_request("https://catalog.test/api/v1", &UPLOAD, Some(&untyped)).unwrap();
        assert_eq!(request.header("Content-Type"), None);
    }

    #[test]
    fn test_artifact_path_params() {
        let options = DeleteArtifactOptions {
            artifact_id: Some("a".to_string()),
            ..Default::default()
        };

        assert_eq!(options.missing_required_fields(), vec!["object_id"]);
        assert_eq!(options.path_params(), vec![("artifact_id", "a")]);
    }
}
