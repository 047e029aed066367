use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Namespace prefix accepted (and ignored) when matching block names.
const DEFAULT_NAMESPACE: &str = "minecraft:";

/// Canonical block-type identifier as produced by a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockType(String);

impl BlockType {
    /// Wrap an already-canonical name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Canonical name used as the catalog key.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Block-type lookup supplied by the host.
pub trait BlockRegistry {
    /// Resolve a user-written name to a block type, if the host knows it.
    fn match_type(&self, name: &str) -> Option<BlockType>;

    /// Whether the block type is a solid block.
    fn is_solid(&self, block: &BlockType) -> bool;
}

impl<R: BlockRegistry + ?Sized> BlockRegistry for &R {
    fn match_type(&self, name: &str) -> Option<BlockType> {
        (**self).match_type(name)
    }

    fn is_solid(&self, block: &BlockType) -> bool {
        (**self).is_solid(block)
    }
}

/// In-memory registry keyed by canonical name.
///
/// Lookups are forgiving in the same way server block lookups are: a
/// `minecraft:` prefix is ignored, case does not matter, runs of whitespace
/// become `_`, and any other non-word character is dropped. So
/// `"minecraft:ender chest"` resolves to `ENDER_CHEST`.
#[derive(Debug, Clone, Default)]
pub struct BlockTypeTable {
    solid: HashMap<String, bool>,
}

impl BlockTypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block type, replacing any previous entry with the same name.
    pub fn with_block(mut self, name: &str, solid: bool) -> Self {
        self.insert(name, solid);
        self
    }

    pub fn insert(&mut self, name: &str, solid: bool) {
        self.solid.insert(normalize_name(name), solid);
    }

    pub fn len(&self) -> usize {
        self.solid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solid.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, bool)> for BlockTypeTable {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, solid) in iter {
            table.insert(name.as_ref(), solid);
        }
        table
    }
}

impl BlockRegistry for BlockTypeTable {
    fn match_type(&self, name: &str) -> Option<BlockType> {
        let key = normalize_name(name);
        self.solid
            .contains_key(&key)
            .then(|| BlockType::new(key))
    }

    fn is_solid(&self, block: &BlockType) -> bool {
        self.solid.get(block.name()).copied().unwrap_or(false)
    }
}

/// Normalize a user-written block name into its canonical form.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    let unprefixed = match trimmed.get(..DEFAULT_NAMESPACE.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(DEFAULT_NAMESPACE) => {
            &trimmed[DEFAULT_NAMESPACE.len()..]
        }
        _ => trimmed,
    };

    let mut out = String::with_capacity(unprefixed.len());
    let mut in_whitespace = false;
    for ch in unprefixed.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch.to_ascii_uppercase());
        }
    }
    out
}
