//! YAML key-value documents with dotted-path typed getters.
//!
//! Getters never fail: a missing key, a YAML null, or a value of the wrong
//! shape all yield the caller's default. Scalars are coerced the way server
//! config files are usually read (a number stored where a string is expected
//! reads as its text form, an integer read as a double widens, a double read
//! as an integer truncates).

use crate::ConfigError;
use log::{debug, error};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Separator between segments of a key path.
const PATH_SEPARATOR: char = '.';

/// A parsed settings or materials document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Mapping,
}

/// Borrowed view of a mapping inside a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    map: &'a Mapping,
}

impl Document {
    /// An empty document; every getter returns its default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a document from YAML text. Blank input is an empty document.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::empty());
        }
        match serde_yaml::from_str::<Value>(contents)? {
            Value::Mapping(root) => Ok(Self { root }),
            Value::Null => Ok(Self::empty()),
            other => Err(ConfigError::InvalidField {
                path: "<root>".to_string(),
                message: format!("expected a mapping, found {}", value_kind(&other)),
            }),
        }
    }

    /// Read and parse a document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("loading document (path={})", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Read a document, falling back to an empty one when the file is
    /// missing or unreadable. The failure is logged.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(document) => document,
            Err(err) => {
                error!("cannot load document (path={}): {err}", path.display());
                Self::empty()
            }
        }
    }

    /// Serialize the document to disk, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let write_failed = |source| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
        let contents = serde_yaml::to_string(&self.root)?;
        fs::write(path, contents).map_err(write_failed)
    }

    /// Raw value at a dotted key path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.root().get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some_and(|value| !value.is_null())
    }

    /// Text form of a scalar at `path`, or `None` when absent or not a scalar.
    pub fn get_opt_string(&self, path: &str) -> Option<String> {
        self.get(path).and_then(scalar_to_string)
    }

    pub fn get_string(&self, path: &str, default: &str) -> String {
        self.get_opt_string(path).unwrap_or_else(|| default.to_string())
    }

    pub fn get_bool(&self, path: &str, default: bool) -> bool {
        self.get(path).and_then(Value::as_bool).unwrap_or(default)
    }

    pub fn get_int(&self, path: &str, default: i64) -> i64 {
        match self.get(path) {
            Some(Value::Number(number)) => number
                .as_i64()
                .or_else(|| number.as_f64().map(|value| value as i64))
                .unwrap_or(default),
            _ => default,
        }
    }

    pub fn get_double(&self, path: &str, default: f64) -> f64 {
        self.get(path).and_then(Value::as_f64).unwrap_or(default)
    }

    /// Scalar entries of the sequence at `path`; anything else is skipped.
    /// A missing or non-sequence value is an empty list.
    pub fn get_string_list(&self, path: &str) -> Vec<String> {
        match self.get(path) {
            Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
            _ => Vec::new(),
        }
    }

    /// Mapping at `path`, if there is one.
    pub fn section(&self, path: &str) -> Option<Section<'_>> {
        self.root().section(path)
    }

    /// The top-level mapping.
    pub fn root(&self) -> Section<'_> {
        Section { map: &self.root }
    }
}

impl<'a> Section<'a> {
    /// Child keys. With `deep`, nested mappings contribute dotted paths too,
    /// each parent listed before its children.
    pub fn keys(&self, deep: bool) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(self.map, None, deep, &mut keys);
        keys
    }

    /// Raw value at a dotted path relative to this section.
    pub fn get(&self, path: &str) -> Option<&'a Value> {
        let mut segments = path.split(PATH_SEPARATOR);
        let first = segments.next()?;
        let mut current = lookup(self.map, first)?;
        for segment in segments {
            match current {
                Value::Mapping(map) => current = lookup(map, segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Nested mapping at a dotted path relative to this section.
    pub fn section(&self, path: &str) -> Option<Section<'a>> {
        match self.get(path)? {
            Value::Mapping(map) => Some(Section { map }),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Find a child by its text key; non-string scalar keys match their text form.
fn lookup<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(key) {
        return Some(value);
    }
    map.iter()
        .find(|(candidate, _)| scalar_to_string(candidate).as_deref() == Some(key))
        .map(|(_, value)| value)
}

fn collect_keys(map: &Mapping, prefix: Option<&str>, deep: bool, keys: &mut Vec<String>) {
    for (key, value) in map {
        let Some(key) = scalar_to_string(key) else {
            continue;
        };
        let full = match prefix {
            Some(prefix) => format!("{prefix}{PATH_SEPARATOR}{key}"),
            None => key,
        };
        match value {
            Value::Mapping(child) if deep => {
                keys.push(full.clone());
                collect_keys(child, Some(&full), deep, keys);
            }
            _ => keys.push(full),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}

/// Human-readable name of a YAML value's shape.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
Version: 0.1.0
Radius: 4
Effects:
  Enabled: false
  Chance: 2
DisabledOnWorlds:
  - world_nether
  - 7
  - [nested]
Explosions:
  NextLevelDamageChance: 0.25
"#;

    #[test]
    fn typed_getters_read_present_values() {
        let doc = Document::from_yaml_str(SAMPLE).expect("doc");
        assert_eq!(doc.get_string("Version", "x"), "0.1.0");
        assert_eq!(doc.get_int("Radius", 3), 4);
        assert!(!doc.get_bool("Effects.Enabled", true));
        assert_eq!(doc.get_double("Effects.Chance", 0.1), 2.0);
        assert_eq!(doc.get_double("Explosions.NextLevelDamageChance", 0.5), 0.25);
    }

    #[test]
    fn typed_getters_fall_back_on_absent_or_mistyped_values() {
        let doc = Document::from_yaml_str(SAMPLE).expect("doc");
        assert_eq!(doc.get_int("Missing", 9), 9);
        assert!(doc.get_bool("Radius", true));
        assert_eq!(doc.get_int("Effects", 1), 1);
        assert_eq!(doc.get_string("Effects", "fallback"), "fallback");
        assert_eq!(doc.get_int("Radius.Deeper", 2), 2);
    }

    #[test]
    fn string_list_keeps_scalars_only() {
        let doc = Document::from_yaml_str(SAMPLE).expect("doc");
        assert_eq!(
            doc.get_string_list("DisabledOnWorlds"),
            vec!["world_nether".to_string(), "7".to_string()]
        );
        assert!(doc.get_string_list("Radius").is_empty());
    }

    #[test]
    fn section_keys_shallow_and_deep() {
        let doc = Document::from_yaml_str("A:\n  B:\n    C: 1\n  D: 2\n").expect("doc");
        let section = doc.section("A").expect("section");
        assert_eq!(section.keys(false), vec!["B".to_string(), "D".to_string()]);
        assert_eq!(
            section.keys(true),
            vec!["B".to_string(), "B.C".to_string(), "D".to_string()]
        );
    }

    #[test]
    fn numeric_keys_are_addressable_by_text() {
        let doc = Document::from_yaml_str("Tiers:\n  1: first\n").expect("doc");
        assert_eq!(doc.get_string("Tiers.1", ""), "first");
    }

    #[test]
    fn blank_and_null_documents_are_empty() {
        assert_eq!(Document::from_yaml_str("").expect("blank"), Document::empty());
        assert_eq!(Document::from_yaml_str("~").expect("null"), Document::empty());
        assert!(Document::from_yaml_str("- a\n- b\n").is_err());
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let temp = TempDir::new().expect("tmp");
        let doc = Document::load_or_empty(temp.path().join("absent.yml"));
        assert!(doc.root().is_empty());
    }

    #[test]
    fn save_writes_a_reloadable_document() {
        let temp = TempDir::new().expect("tmp");
        let path = temp.path().join("nested").join("config.yml.old");
        let doc = Document::from_yaml_str(SAMPLE).expect("doc");
        doc.save(&path).expect("save");
        let reloaded = Document::load(&path).expect("reload");
        assert_eq!(reloaded, doc);
    }
}
