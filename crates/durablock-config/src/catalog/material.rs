//! Per-block durability rules decoded from a `HandledMaterials` entry.

use crate::document::value_kind;
use durablock_protocol::BlockType;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::time::Duration;
use thiserror::Error;

/// Reasons a single materials entry cannot be turned into a rule.
#[derive(Debug, Error)]
pub enum MaterialError {
    /// The entry is a scalar or list instead of a mapping.
    #[error("expected a mapping, found {found}")]
    NotASection { found: &'static str },
    /// A field has the wrong type or an unknown key was used.
    #[error("failed to decode material: {0}")]
    Decode(#[from] serde_yaml::Error),
    /// A field decoded but holds an unusable value.
    #[error("invalid {field}: {message}")]
    OutOfRange {
        field: &'static str,
        message: String,
    },
}

/// Which damage sources may wear a block down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DamageSources {
    #[serde(rename = "TNT", default = "default_true")]
    pub tnt: bool,
    #[serde(default = "default_true")]
    pub cannon: bool,
    #[serde(default = "default_true")]
    pub creepers: bool,
    #[serde(default = "default_true")]
    pub ghasts: bool,
    #[serde(default = "default_true")]
    pub withers: bool,
    #[serde(default = "default_true")]
    pub minecart: bool,
    #[serde(default = "default_true")]
    pub null_damage: bool,
}

impl Default for DamageSources {
    fn default() -> Self {
        Self {
            tnt: true,
            cannon: true,
            creepers: true,
            ghasts: true,
            withers: true,
            minecart: true,
            null_damage: true,
        }
    }
}

/// Raw layout of one `HandledMaterials` entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawMaterial {
    #[serde(default)]
    durability: RawDurability,
    #[serde(default = "default_true")]
    destructible: bool,
    #[serde(default)]
    blast_radius: i64,
    #[serde(default)]
    enabled_for: DamageSources,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
struct RawDurability {
    #[serde(default = "default_true")]
    enabled: bool,
    #[serde(default = "default_amount")]
    amount: i64,
    #[serde(default = "default_chance_to_drop")]
    chance_to_drop: f64,
    #[serde(default)]
    reset_enabled: bool,
    #[serde(default = "default_reset_after_ms")]
    reset_after: u64,
}

impl Default for RawDurability {
    fn default() -> Self {
        Self {
            enabled: true,
            amount: default_amount(),
            chance_to_drop: default_chance_to_drop(),
            reset_enabled: false,
            reset_after: default_reset_after_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Hits needed to break a block when the entry does not say.
fn default_amount() -> i64 {
    1
}

fn default_chance_to_drop() -> f64 {
    0.7
}

/// Time before accumulated damage resets, in milliseconds.
fn default_reset_after_ms() -> u64 {
    10_000
}

/// Durability rule for one block type. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurabilityMaterial {
    block: BlockType,
    enabled: bool,
    durability: u32,
    chance_to_drop: f64,
    reset_enabled: bool,
    reset_after_ms: u64,
    destructible: bool,
    blast_radius: u32,
    enabled_for: DamageSources,
}

impl DurabilityMaterial {
    /// Build a rule from the entry's sub-section.
    pub fn from_value(block: BlockType, value: &Value) -> Result<Self, MaterialError> {
        if !value.is_mapping() {
            return Err(MaterialError::NotASection {
                found: value_kind(value),
            });
        }
        let raw: RawMaterial = serde_yaml::from_value(value.clone())?;
        let durability = &raw.durability;

        let amount = u32::try_from(durability.amount)
            .ok()
            .filter(|amount| *amount >= 1)
            .ok_or_else(|| MaterialError::OutOfRange {
                field: "Durability.Amount",
                message: format!("must be at least 1, got {}", durability.amount),
            })?;
        if !(0.0..=1.0).contains(&durability.chance_to_drop) {
            return Err(MaterialError::OutOfRange {
                field: "Durability.ChanceToDrop",
                message: format!("must be within 0..=1, got {}", durability.chance_to_drop),
            });
        }
        let blast_radius =
            u32::try_from(raw.blast_radius).map_err(|_| MaterialError::OutOfRange {
                field: "BlastRadius",
                message: format!("must not be negative, got {}", raw.blast_radius),
            })?;

        Ok(Self {
            block,
            enabled: durability.enabled,
            durability: amount,
            chance_to_drop: durability.chance_to_drop,
            reset_enabled: durability.reset_enabled,
            reset_after_ms: durability.reset_after,
            destructible: raw.destructible,
            blast_radius,
            enabled_for: raw.enabled_for,
        })
    }

    pub fn block(&self) -> &BlockType {
        &self.block
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Number of hits the block absorbs before breaking.
    pub fn durability(&self) -> u32 {
        self.durability
    }

    pub fn chance_to_drop(&self) -> f64 {
        self.chance_to_drop
    }

    pub fn reset_enabled(&self) -> bool {
        self.reset_enabled
    }

    pub fn reset_after(&self) -> Duration {
        Duration::from_millis(self.reset_after_ms)
    }

    pub fn destructible(&self) -> bool {
        self.destructible
    }

    /// Per-block blast radius; `0` defers to the global `Radius` setting.
    pub fn blast_radius(&self) -> u32 {
        self.blast_radius
    }

    pub fn enabled_for(&self) -> DamageSources {
        self.enabled_for
    }
}
