//! Test helpers shared across durablock crates.

pub mod fixtures;
pub mod registry;
pub mod resources;

pub use fixtures::{DataDir, materials_yaml, settings_yaml};
pub use registry::stub_registry;
pub use resources::{FailingReader, FailingResources, MemoryResources};
