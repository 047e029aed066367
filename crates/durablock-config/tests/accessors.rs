//! Accessor defaults, document values, and clamping.

use durablock_config::{
    BundledResources, Document, DurabilityConfig, DurabilityConfigOptions, clamp_effects_chance,
};
use durablock_test_utils::stub_registry;
use pretty_assertions::assert_eq;

fn with_settings(yaml: &str) -> DurabilityConfig {
    let mut config = DurabilityConfig::new(
        DurabilityConfigOptions::new("unused", "0.1.0"),
        BundledResources,
    );
    config.replace_settings(Document::from_yaml_str(yaml).expect("settings"));
    config
}

/// Every accessor returns the value written in the document.
#[test]
fn accessors_read_document_values() {
    let config = with_settings(
        r#"
Version: 0.1.0
Verbose: true
Debug: true
DisabledOnWorlds: [arena, lobby]
Radius: 6
DurabilityRegeneratesOverTime: true
FluidsProtectIndustructables: false
ProtectBedrockBorders: false
DurabilityCheckItem: ENDER_CHEST
checkupdate: false
downloadupdate: true
BorderToProtect:
  World: 8
  Nether: 120
Explosions:
  BypassAllFluidProtection: true
  TNTCannonsProtected: false
  IgnoreUnhandledTypes: true
  DisableDamageBleeding: false
  NextLevelDamageChance: 0.25
Effects:
  Enabled: false
  Chance: 0.3
"#,
    );

    assert!(config.verbose());
    assert!(config.debug());
    assert_eq!(
        config.disabled_worlds(),
        vec!["arena".to_string(), "lobby".to_string()]
    );
    assert_eq!(config.radius(), 6);
    assert!(config.materials_regenerate_over_time());
    assert!(!config.fluids_protect_indestructibles());
    assert!(!config.protect_bedrock_borders());
    assert_eq!(config.durability_check_item(), "ENDER_CHEST");
    assert_eq!(
        config
            .durability_check_item_type(&stub_registry())
            .map(|block| block.name().to_string()),
        Some("ENDER_CHEST".to_string())
    );
    assert!(!config.check_update());
    assert!(config.download_update());
    assert_eq!(config.border_to_protect_normal(), 8);
    assert_eq!(config.border_to_protect_nether(), 120);
    assert!(config.bypass_all_fluid_protection());
    assert!(!config.protect_tnt_cannons());
    assert!(config.ignore_unhandled_explosion_types());
    assert!(!config.disable_damage_bleeding());
    assert_eq!(config.next_layer_damage_chance(), 0.25);
    assert!(!config.effects_enabled());
    assert_eq!(config.effects_chance(), 0.3);
}

/// An empty document yields every documented default.
#[test]
fn accessors_fall_back_to_defaults() {
    let config = with_settings("Version: 0.1.0\n");

    assert!(!config.verbose());
    assert!(!config.debug());
    assert!(config.disabled_worlds().is_empty());
    assert_eq!(config.radius(), 3);
    assert!(!config.materials_regenerate_over_time());
    assert!(config.fluids_protect_indestructibles());
    assert!(!config.bypass_all_fluid_protection());
    assert!(config.protect_tnt_cannons());
    assert!(config.check_update());
    assert!(!config.download_update());
    assert!(config.effects_enabled());
    assert_eq!(config.effects_chance(), 0.12);
    assert!(config.protect_bedrock_borders());
    assert!(!config.ignore_unhandled_explosion_types());
    assert_eq!(config.durability_check_item(), "POTATO_ITEM");
    assert_eq!(config.border_to_protect_normal(), 5);
    assert_eq!(config.border_to_protect_nether(), 123);
    assert!(config.disable_damage_bleeding());
    assert_eq!(config.next_layer_damage_chance(), 0.5);
}

/// Before anything loads, debug reads as on and verbose as off.
#[test]
fn unloaded_debug_is_open_and_verbose_closed() {
    let config = DurabilityConfig::new(
        DurabilityConfigOptions::new("unused", "0.1.0"),
        BundledResources,
    );

    assert!(config.debug());
    assert!(!config.verbose());
    assert_eq!(config.radius(), 3);
}

#[test]
fn effects_chance_is_clamped() {
    assert_eq!(with_settings("Effects:\n  Chance: 0\n").effects_chance(), 0.01);
    assert_eq!(with_settings("Effects:\n  Chance: 0.75\n").effects_chance(), 0.6);
    assert_eq!(with_settings("Effects:\n  Chance: 0.3\n").effects_chance(), 0.3);
    assert_eq!(with_settings("Effects:\n  Chance: -2\n").effects_chance(), 0.01);
    assert_eq!(clamp_effects_chance(0.6), 0.6);
    assert_eq!(clamp_effects_chance(f64::NAN), 0.01);
}
