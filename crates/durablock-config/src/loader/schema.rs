//! Shape checks for the settings document.
//!
//! Nothing here is fatal. Accessors already fall back to defaults, so the
//! loader only surfaces these as warnings to tell operators that a value they
//! wrote is being ignored.

use crate::document::value_kind;
use crate::{ConfigError, Document, keys};
use serde_yaml::{Mapping, Value};

/// Expected shape of a settings value.
#[derive(Debug, Clone, Copy)]
enum Kind {
    Bool,
    Int,
    Number,
    Text,
    TextList,
}

const TOP_LEVEL_KEYS: &[&str] = &[
    keys::VERSION,
    keys::VERBOSE,
    keys::DEBUG,
    keys::DISABLED_ON_WORLDS,
    keys::RADIUS,
    keys::REGENERATES_OVER_TIME,
    keys::FLUIDS_PROTECT_INDESTRUCTIBLES,
    keys::CHECK_UPDATE,
    keys::DOWNLOAD_UPDATE,
    keys::PROTECT_BEDROCK_BORDERS,
    keys::DURABILITY_CHECK_ITEM,
    keys::EXPLOSIONS,
    keys::EFFECTS,
    keys::BORDER_TO_PROTECT,
];

const TYPED_KEYS: &[(&str, Kind)] = &[
    (keys::VERSION, Kind::Text),
    (keys::VERBOSE, Kind::Bool),
    (keys::DEBUG, Kind::Bool),
    (keys::DISABLED_ON_WORLDS, Kind::TextList),
    (keys::RADIUS, Kind::Int),
    (keys::REGENERATES_OVER_TIME, Kind::Bool),
    (keys::FLUIDS_PROTECT_INDESTRUCTIBLES, Kind::Bool),
    (keys::CHECK_UPDATE, Kind::Bool),
    (keys::DOWNLOAD_UPDATE, Kind::Bool),
    (keys::PROTECT_BEDROCK_BORDERS, Kind::Bool),
    (keys::DURABILITY_CHECK_ITEM, Kind::Text),
    (keys::BYPASS_ALL_FLUID_PROTECTION, Kind::Bool),
    (keys::TNT_CANNONS_PROTECTED, Kind::Bool),
    (keys::IGNORE_UNHANDLED_TYPES, Kind::Bool),
    (keys::DISABLE_DAMAGE_BLEEDING, Kind::Bool),
    (keys::NEXT_LEVEL_DAMAGE_CHANCE, Kind::Number),
    (keys::EFFECTS_ENABLED, Kind::Bool),
    (keys::EFFECTS_CHANCE, Kind::Number),
    (keys::BORDER_WORLD, Kind::Int),
    (keys::BORDER_NETHER, Kind::Int),
];

/// Sections whose children are all listed in `TYPED_KEYS`.
const CLOSED_SECTIONS: &[&str] = &[keys::EXPLOSIONS, keys::EFFECTS, keys::BORDER_TO_PROTECT];

/// Report unknown keys and mistyped values in a settings document.
pub(crate) fn lint_settings(document: &Document) -> Vec<ConfigError> {
    let mut issues = Vec::new();

    for key in document.root().keys(false) {
        if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
            issues.push(invalid_field(&key, "unknown key"));
        }
    }

    for section in CLOSED_SECTIONS {
        match document.get(section) {
            None | Some(Value::Null) => {}
            Some(Value::Mapping(map)) => ensure_allowed_children(map, section, &mut issues),
            Some(other) => issues.push(invalid_field(
                section,
                &format!("expected mapping, found {}", value_kind(other)),
            )),
        }
    }

    for (path, kind) in TYPED_KEYS {
        if let Some(value) = document.get(path) {
            if let Err(message) = expect_kind(value, *kind) {
                issues.push(invalid_field(path, &message));
            }
        }
    }

    issues
}

fn ensure_allowed_children(map: &Mapping, section: &str, issues: &mut Vec<ConfigError>) {
    for key in map.keys() {
        let Some(key) = key.as_str() else {
            issues.push(invalid_field(section, "non-string key"));
            continue;
        };
        let path = join_path(section, key);
        if !TYPED_KEYS.iter().any(|(known, _)| *known == path) {
            issues.push(invalid_field(&path, "unknown key"));
        }
    }
}

fn expect_kind(value: &Value, kind: Kind) -> Result<(), String> {
    let ok = match kind {
        Kind::Bool => value.is_bool(),
        // Floats are truncated on read, so any number is applied.
        Kind::Int => value.is_number(),
        Kind::Number => value.is_number(),
        Kind::Text => value.is_string() || value.is_number(),
        Kind::TextList => match value {
            Value::Sequence(items) => items
                .iter()
                .all(|item| item.is_string() || item.is_number() || item.is_bool()),
            _ => false,
        },
    };
    if ok || value.is_null() {
        return Ok(());
    }
    Err(format!(
        "expected {}, found {}; using default",
        kind_name(kind),
        value_kind(value)
    ))
}

fn kind_name(kind: Kind) -> &'static str {
    match kind {
        Kind::Bool => "boolean",
        Kind::Int => "integer",
        Kind::Number => "number",
        Kind::Text => "string",
        Kind::TextList => "list of strings",
    }
}

fn join_path(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{base}.{key}")
    }
}

fn invalid_field(path: &str, message: &str) -> ConfigError {
    ConfigError::InvalidField {
        path: path.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lint(yaml: &str) -> Vec<String> {
        let document = Document::from_yaml_str(yaml).expect("doc");
        lint_settings(&document)
            .into_iter()
            .map(|issue| issue.to_string())
            .collect()
    }

    #[test]
    fn clean_document_has_no_issues() {
        let issues = lint(
            "Version: 0.1.0\nRadius: 3\nEffects:\n  Enabled: true\n  Chance: 0.2\nDisabledOnWorlds: [a, b]\n",
        );
        assert_eq!(issues, Vec::<String>::new());
    }

    #[test]
    fn reports_unknown_keys_at_every_level() {
        let issues = lint("Version: 0.1.0\nRadious: 3\nEffects:\n  Chanse: 0.2\n");
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("Radious"));
        assert!(issues[1].contains("Effects.Chanse"));
    }

    #[test]
    fn reports_mistyped_values() {
        let issues = lint("Version: 0.1.0\nRadius: three\nVerbose: 1\n");
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().any(|issue| issue.contains("Radius")));
        assert!(issues.iter().any(|issue| issue.contains("Verbose")));
    }

    #[test]
    fn floats_count_as_integers() {
        let issues = lint("Version: 0.1.0\nRadius: 5.0\nBorderToProtect:\n  World: 6.5\n");
        assert_eq!(issues, Vec::<String>::new());
    }
}
