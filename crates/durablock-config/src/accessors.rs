//! Typed getters over the live settings document.
//!
//! Every getter falls back to its default when the key is absent, holds the
//! wrong type, or no settings document has been loaded yet.

use crate::catalog::{self, CatalogReport, DurabilityCatalog, LogMode};
use crate::{Document, DurabilityConfig, keys};
use durablock_protocol::{BlockRegistry, BlockType};

pub const DEFAULT_RADIUS: i64 = 3;
pub const DEFAULT_EFFECTS_CHANCE: f64 = 0.12;
/// Upper bound for the effects chance.
pub const MAX_EFFECTS_CHANCE: f64 = 0.6;
/// Substitute for a non-positive effects chance.
pub const MIN_EFFECTS_CHANCE: f64 = 0.01;
pub const DEFAULT_CHECK_ITEM: &str = "POTATO_ITEM";
pub const DEFAULT_BORDER_WORLD: i64 = 5;
pub const DEFAULT_BORDER_NETHER: i64 = 123;
pub const DEFAULT_NEXT_LAYER_DAMAGE_CHANCE: f64 = 0.5;

impl DurabilityConfig {
    fn with_settings<T>(&self, default: T, read: impl FnOnce(&Document) -> T) -> T {
        match self.settings.as_deref() {
            Some(document) => read(document),
            None => default,
        }
    }

    fn bool_setting(&self, path: &str, default: bool) -> bool {
        self.with_settings(default, |doc| doc.get_bool(path, default))
    }

    fn int_setting(&self, path: &str, default: i64) -> i64 {
        self.with_settings(default, |doc| doc.get_int(path, default))
    }

    fn double_setting(&self, path: &str, default: f64) -> f64 {
        self.with_settings(default, |doc| doc.get_double(path, default))
    }

    pub fn verbose(&self) -> bool {
        self.bool_setting(keys::VERBOSE, false)
    }

    /// Debug mode. Reads as enabled while no settings document is loaded, so
    /// early load problems are logged in full.
    pub fn debug(&self) -> bool {
        self.bool_setting(keys::DEBUG, false) || self.settings.is_none()
    }

    pub fn disabled_worlds(&self) -> Vec<String> {
        self.with_settings(Vec::new(), |doc| {
            doc.get_string_list(keys::DISABLED_ON_WORLDS)
        })
    }

    pub fn radius(&self) -> i64 {
        self.int_setting(keys::RADIUS, DEFAULT_RADIUS)
    }

    pub fn materials_regenerate_over_time(&self) -> bool {
        self.bool_setting(keys::REGENERATES_OVER_TIME, false)
    }

    pub fn fluids_protect_indestructibles(&self) -> bool {
        self.bool_setting(keys::FLUIDS_PROTECT_INDESTRUCTIBLES, true)
    }

    pub fn bypass_all_fluid_protection(&self) -> bool {
        self.bool_setting(keys::BYPASS_ALL_FLUID_PROTECTION, false)
    }

    pub fn protect_tnt_cannons(&self) -> bool {
        self.bool_setting(keys::TNT_CANNONS_PROTECTED, true)
    }

    pub fn check_update(&self) -> bool {
        self.bool_setting(keys::CHECK_UPDATE, true)
    }

    pub fn download_update(&self) -> bool {
        self.bool_setting(keys::DOWNLOAD_UPDATE, false)
    }

    pub fn effects_enabled(&self) -> bool {
        self.bool_setting(keys::EFFECTS_ENABLED, true)
    }

    /// Chance of playing an effect, clamped to `(0, 0.6]`.
    pub fn effects_chance(&self) -> f64 {
        clamp_effects_chance(self.double_setting(keys::EFFECTS_CHANCE, DEFAULT_EFFECTS_CHANCE))
    }

    pub fn protect_bedrock_borders(&self) -> bool {
        self.bool_setting(keys::PROTECT_BEDROCK_BORDERS, true)
    }

    pub fn ignore_unhandled_explosion_types(&self) -> bool {
        self.bool_setting(keys::IGNORE_UNHANDLED_TYPES, false)
    }

    /// Name of the item used to inspect block durability.
    pub fn durability_check_item(&self) -> String {
        self.with_settings(DEFAULT_CHECK_ITEM.to_string(), |doc| {
            doc.get_string(keys::DURABILITY_CHECK_ITEM, DEFAULT_CHECK_ITEM)
        })
    }

    /// The check item resolved through the host registry.
    pub fn durability_check_item_type(&self, registry: &dyn BlockRegistry) -> Option<BlockType> {
        registry.match_type(&self.durability_check_item())
    }

    pub fn border_to_protect_normal(&self) -> i64 {
        self.int_setting(keys::BORDER_WORLD, DEFAULT_BORDER_WORLD)
    }

    pub fn border_to_protect_nether(&self) -> i64 {
        self.int_setting(keys::BORDER_NETHER, DEFAULT_BORDER_NETHER)
    }

    pub fn disable_damage_bleeding(&self) -> bool {
        self.bool_setting(keys::DISABLE_DAMAGE_BLEEDING, true)
    }

    pub fn next_layer_damage_chance(&self) -> f64 {
        self.double_setting(keys::NEXT_LEVEL_DAMAGE_CHANCE, DEFAULT_NEXT_LAYER_DAMAGE_CHANCE)
    }

    /// Translate the live materials document, keeping per-entry outcomes.
    /// Recomputed on every call.
    pub fn translate_catalog(&self, registry: &dyn BlockRegistry) -> CatalogReport {
        let mode = LogMode {
            verbose: self.verbose(),
            debug: self.debug(),
        };
        match self.materials.as_deref() {
            Some(materials) => catalog::translate(materials, registry, mode),
            None => catalog::translate(&Document::empty(), registry, mode),
        }
    }

    /// The durability catalog for the live materials document.
    pub fn build_catalog(&self, registry: &dyn BlockRegistry) -> DurabilityCatalog {
        self.translate_catalog(registry).catalog
    }
}

/// Clamp an effects chance into `(0, 0.6]`. `NaN` counts as non-positive.
pub fn clamp_effects_chance(value: f64) -> f64 {
    if value > MAX_EFFECTS_CHANCE {
        MAX_EFFECTS_CHANCE
    } else if value > 0.0 {
        value
    } else {
        MIN_EFFECTS_CHANCE
    }
}
