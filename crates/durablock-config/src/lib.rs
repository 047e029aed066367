//! Durability configuration plane.
//!
//! Loads the settings and materials documents from a data directory, migrates
//! outdated settings once, exposes typed accessors, and derives the per-block
//! durability catalog on demand.

mod accessors;
mod catalog;
mod document;
mod error;
pub mod keys;
mod loader;
mod resources;
mod snapshot;

/// Accessor defaults and the effects-chance clamp.
pub use accessors::*;
/// Catalog types and the translation entry point.
pub use catalog::{
    CatalogEntry, CatalogReport, DamageSources, DurabilityCatalog, DurabilityMaterial,
    EntryOutcome, LogMode, MaterialError, SkipReason, translate,
};
/// YAML document adapter.
pub use document::{Document, Section};
/// Public error type returned by document APIs.
pub use error::ConfigError;
/// Loader types and constants.
pub use loader::{
    BACKUP_SUFFIX, DEFAULT_MATERIALS_FILE, DEFAULT_SETTINGS_FILE, DurabilityConfig,
    DurabilityConfigOptions, LoadReport, LoadStatus, MAX_MIGRATIONS,
};
/// Bundled default documents.
pub use resources::{BUNDLED_VERSION, BundledResources, DirectoryResources};
