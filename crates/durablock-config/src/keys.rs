//! Key paths read from the settings document.

/// Version marker compared with the running host version.
pub const VERSION: &str = "Version";
/// Log every loaded material.
pub const VERBOSE: &str = "Verbose";
/// Log disabled materials and load details.
pub const DEBUG: &str = "Debug";
/// Worlds where durability handling is off.
pub const DISABLED_ON_WORLDS: &str = "DisabledOnWorlds";
/// Explosion radius scanned for handled blocks.
pub const RADIUS: &str = "Radius";
/// Whether accumulated damage wears off.
pub const REGENERATES_OVER_TIME: &str = "DurabilityRegeneratesOverTime";
/// Spelling matches the key shipped in existing config files.
pub const FLUIDS_PROTECT_INDESTRUCTIBLES: &str = "FluidsProtectIndustructables";
/// Look for a newer release on startup.
pub const CHECK_UPDATE: &str = "checkupdate";
/// Download a newer release when one is found.
pub const DOWNLOAD_UPDATE: &str = "downloadupdate";
/// Keep the bedrock floor and ceiling intact.
pub const PROTECT_BEDROCK_BORDERS: &str = "ProtectBedrockBorders";
/// Item name used to inspect a block's durability.
pub const DURABILITY_CHECK_ITEM: &str = "DurabilityCheckItem";

/// Section holding explosion tuning.
pub const EXPLOSIONS: &str = "Explosions";
/// Ignore fluids entirely when damaging blocks.
pub const BYPASS_ALL_FLUID_PROTECTION: &str = "Explosions.BypassAllFluidProtection";
/// Keep fluid protection for TNT cannons.
pub const TNT_CANNONS_PROTECTED: &str = "Explosions.TNTCannonsProtected";
/// Skip explosion sources with no `EnabledFor` switch.
pub const IGNORE_UNHANDLED_TYPES: &str = "Explosions.IgnoreUnhandledTypes";
/// Stop damage from passing through to deeper layers.
pub const DISABLE_DAMAGE_BLEEDING: &str = "Explosions.DisableDamageBleeding";
/// Chance that the next layer also takes damage.
pub const NEXT_LEVEL_DAMAGE_CHANCE: &str = "Explosions.NextLevelDamageChance";

/// Section holding effect tuning.
pub const EFFECTS: &str = "Effects";
/// Play effects on damaged blocks.
pub const EFFECTS_ENABLED: &str = "Effects.Enabled";
/// Chance of playing an effect per hit.
pub const EFFECTS_CHANCE: &str = "Effects.Chance";

/// Section holding the protected border heights.
pub const BORDER_TO_PROTECT: &str = "BorderToProtect";
/// Protected border height in normal worlds.
pub const BORDER_WORLD: &str = "BorderToProtect.World";
/// Protected border height in the nether.
pub const BORDER_NETHER: &str = "BorderToProtect.Nether";

/// Section of the materials document holding one entry per block type.
pub const HANDLED_MATERIALS: &str = "HandledMaterials";
