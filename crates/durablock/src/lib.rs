//! Public surface for durablock.
//!
//! This crate re-exports the configuration plane and the host seams, and
//! provides small helpers so hosts wire things up the same way.

/// Re-export for convenience.
pub use durablock_config as config;
/// Re-export for convenience.
pub use durablock_protocol as protocol;

use durablock_config::{BundledResources, DurabilityConfig, DurabilityConfigOptions, LoadReport};
use log::warn;
use std::path::Path;

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Hosts are still expected to
/// call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}

/// Create the subsystem over `data_dir` with the bundled defaults and load it.
///
/// The instance is returned even when the load is not ready, so the host can
/// inspect the report and retry with `reload` after fixing the files.
pub fn open(data_dir: impl AsRef<Path>, version: &str) -> (DurabilityConfig, LoadReport) {
    let options = DurabilityConfigOptions::new(data_dir, version);
    let mut config = DurabilityConfig::new(options, BundledResources);
    let report = config.load();
    if !report.ready {
        warn!("durability config not ready (status={:?})", report.status);
    }
    (config, report)
}
