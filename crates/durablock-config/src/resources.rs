//! Default documents shipped with the crate.

use durablock_protocol::ResourceProvider;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

/// Version written into the bundled `config.yml`.
pub const BUNDLED_VERSION: &str = env!("CARGO_PKG_VERSION");

const BUNDLED_CONFIG: &[u8] = include_bytes!("../resources/config.yml");
const BUNDLED_MATERIALS: &[u8] = include_bytes!("../resources/materials.yml");

/// Serves `config.yml` and `materials.yml` compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledResources;

impl ResourceProvider for BundledResources {
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        let bytes = match name {
            "config.yml" => BUNDLED_CONFIG,
            "materials.yml" => BUNDLED_MATERIALS,
            _ => return None,
        };
        Some(Box::new(Cursor::new(bytes)))
    }
}

/// Serves defaults from a directory the host ships alongside its binary.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ResourceProvider for DirectoryResources {
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        let file = File::open(self.root.join(name)).ok()?;
        Some(Box::new(file))
    }
}
