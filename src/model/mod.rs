//! Catalog data model.
//!
//! Every type here mirrors a JSON object exchanged with the catalog service.
//! Optional fields are `Option`s skipped when absent, so a decoded object
//! re-encodes without spurious `null`s.
//!
//! Objects whose keys are partly open-ended (locales, account ids) are
//! [`ExtensibleRecord`]s: see the [`extensible`] module.
//!
//! # Overview
//!
//! - [`CatalogEntry`] and its parts ([`Image`], [`Provider`], [`OverviewUI`])
//! - [`ObjectMetadataSet`] and the per-kind metadata it carries
//! - [`PricingGet`] and the pricing tree
//! - [`Visibility`] and [`VisibilityDetailAccounts`]
//! - [`Artifacts`]
//! - [`Page`], the envelope of list responses

mod artifact;
mod catalog;
mod errors;
pub mod extensible;
mod metadata;
mod page;
mod pricing;
mod visibility;

pub use artifact::{Artifact, Artifacts};
pub use catalog::{CatalogEntry, Image, Overview, OverviewUI, Provider};
pub use errors::{PropertyError, SerializationError};
pub use extensible::{DeclaredFields, ExtensibleRecord, NoFields};
pub use metadata::{
    Bullets, Callbacks, DeploymentBase, DeploymentBaseBroker, EnvironmentVariableFields,
    ObjectMetadataBaseAlias, ObjectMetadataBasePlan, ObjectMetadataBaseService,
    ObjectMetadataBaseSla, ObjectMetadataBaseSlaDr, ObjectMetadataBaseTemplate,
    ObjectMetadataBaseTemplateSource, ObjectMetadataSet, Strings, TemplateEnvironmentVariables,
    UIMetaData, UIMetaMedia, Urls, I18N,
};
pub use page::Page;
pub use pricing::{Amount, Metrics, Price, PricingGet, PricingSet, StartingPrice};
pub use visibility::{AccountFields, Visibility, VisibilityDetail, VisibilityDetailAccounts};
