use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary data directory removed on drop.
#[derive(Debug)]
pub struct DataDir {
    temp: TempDir,
}

impl DataDir {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.file(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("dir");
        }
        fs::write(&path, contents).expect("write");
        path
    }

    pub fn read(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.file(name)).ok()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.file(name).exists()
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings YAML with an optional `Version` line followed by `body`.
pub fn settings_yaml(version: Option<&str>, body: &str) -> String {
    match version {
        Some(version) => format!("Version: \"{version}\"\n{body}"),
        None => body.to_string(),
    }
}

/// Materials YAML with one `(name, amount, enabled)` entry per tuple.
pub fn materials_yaml(entries: &[(&str, u32, bool)]) -> String {
    let mut out = String::from("HandledMaterials:\n");
    for (name, amount, enabled) in entries {
        out.push_str(&format!(
            "  {name}:\n    Durability:\n      Enabled: {enabled}\n      Amount: {amount}\n"
        ));
    }
    out
}
