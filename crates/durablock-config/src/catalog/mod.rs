//! Translation of the materials document into the durability catalog.
//!
//! Each `HandledMaterials` entry is resolved independently. A bad entry is
//! logged, recorded with its [`SkipReason`], and never stops the pass.

mod material;

pub use material::{DamageSources, DurabilityMaterial, MaterialError};

use crate::{Document, keys};
use durablock_protocol::{BlockRegistry, BlockType};
use log::{debug, error, info, warn};
use std::collections::HashMap;

/// Lookup from canonical block name to its durability rule.
pub type DurabilityCatalog = HashMap<String, DurabilityMaterial>;

/// Why an entry did not make it into the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The registry does not know the name.
    UnknownType,
    /// The name resolved to a block that is not solid.
    NotSolid(BlockType),
    /// The entry could not be decoded; carries the decode error text.
    Malformed(String),
    /// The entry decoded but is switched off.
    Disabled { block: BlockType, durability: u32 },
}

/// Outcome for one entry, keyed by the name written in the document.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryOutcome {
    Loaded(BlockType),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub key: String,
    pub outcome: EntryOutcome,
}

/// Result of a translation pass.
#[derive(Debug, Clone, Default)]
pub struct CatalogReport {
    pub catalog: DurabilityCatalog,
    /// One outcome per `HandledMaterials` key, in document order.
    pub entries: Vec<CatalogEntry>,
}

impl CatalogReport {
    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.entries.iter().filter_map(|entry| match &entry.outcome {
            EntryOutcome::Skipped(reason) => Some((entry.key.as_str(), reason)),
            EntryOutcome::Loaded(_) => None,
        })
    }
}

/// Log switches consulted while translating.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMode {
    pub verbose: bool,
    pub debug: bool,
}

/// Build the catalog from a materials document.
pub fn translate(
    materials: &Document,
    registry: &dyn BlockRegistry,
    mode: LogMode,
) -> CatalogReport {
    let mut report = CatalogReport::default();
    let Some(section) = materials.section(keys::HANDLED_MATERIALS) else {
        warn!(
            "materials document has no {} section; catalog is empty",
            keys::HANDLED_MATERIALS
        );
        return report;
    };

    for key in section.keys(false) {
        match translate_entry(&key, section.get(&key), registry, mode) {
            Ok(material) => {
                let name = material.block().name().to_string();
                if report.catalog.contains_key(&name) {
                    warn!(
                        "duplicate material entry overrides earlier one (key={key}, block={name})"
                    );
                }
                report.entries.push(CatalogEntry {
                    key,
                    outcome: EntryOutcome::Loaded(material.block().clone()),
                });
                report.catalog.insert(name, material);
            }
            Err(reason) => report.entries.push(CatalogEntry {
                key,
                outcome: EntryOutcome::Skipped(reason),
            }),
        }
    }

    debug!(
        "translated materials (loaded={}, entries={})",
        report.catalog.len(),
        report.entries.len()
    );
    report
}

fn translate_entry(
    key: &str,
    value: Option<&serde_yaml::Value>,
    registry: &dyn BlockRegistry,
    mode: LogMode,
) -> Result<DurabilityMaterial, SkipReason> {
    let Some(block) = registry.match_type(key) else {
        error!("invalid material type: unable to load '{key}'");
        return Err(SkipReason::UnknownType);
    };
    if !registry.is_solid(&block) {
        warn!("non-solid material type: did not load '{key}'");
        return Err(SkipReason::NotSolid(block));
    }

    let null = serde_yaml::Value::Null;
    let material = DurabilityMaterial::from_value(block, value.unwrap_or(&null)).map_err(|err| {
        error!("failed loading material '{key}': {err}");
        SkipReason::Malformed(err.to_string())
    })?;

    if !material.enabled() {
        if mode.debug {
            debug!(
                "disabled durability of '{}' for '{key}'",
                material.durability()
            );
        }
        return Err(SkipReason::Disabled {
            block: material.block().clone(),
            durability: material.durability(),
        });
    }

    if mode.verbose || mode.debug {
        info!(
            "loaded durability of '{}' for '{key}'",
            material.durability()
        );
    }
    Ok(material)
}
