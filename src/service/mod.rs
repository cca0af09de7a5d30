//! The Global Catalog API surface.
//!
//! [`GlobalCatalog`] is the client; each of its methods takes the matching
//! options type from this module.

mod global_catalog;
mod options;

pub use global_catalog::GlobalCatalog;
pub use options::{
    CreateCatalogEntryOptions, DeleteArtifactOptions, DeleteCatalogEntryOptions,
    GetArtifactOptions, GetAuditLogsOptions, GetCatalogEntryOptions, GetChildObjectsOptions,
    GetPricingOptions, GetVisibilityOptions, ListArtifactsOptions, ListCatalogEntriesOptions,
    RestoreCatalogEntryOptions, UpdateCatalogEntryOptions, UpdateVisibilityOptions,
    UploadArtifactOptions,
};
