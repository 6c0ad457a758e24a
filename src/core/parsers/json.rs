use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::core::extract::collapse_whitespace;

/// Keys and texts of localization catalogs that already exist.
///
/// Candidates whose text or fully-qualified key is found here are already
/// localized and are not extracted again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingCatalog {
    pub keys: HashSet<String>,
    /// Source-language texts, whitespace-collapsed.
    pub texts: HashSet<String>,
}

impl ExistingCatalog {
    pub fn covers(&self, qualified_key: &str, text: &str) -> bool {
        self.keys.contains(qualified_key) || self.texts.contains(text)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.texts.is_empty()
    }

    pub fn merge(&mut self, other: ExistingCatalog) {
        self.keys.extend(other.keys);
        self.texts.extend(other.texts);
    }
}

/// Parse an existing catalog file into `catalog`.
///
/// Two layouts are understood:
/// - locale files, nested or flat: `{"pages": {"home": {"title": "Accueil"}}}`
/// - extraction records: `{"pages.common.accueil": {"fr": "Accueil", "en": "Home"}}`,
///   recognized by a string value under `source_locale` next to other strings.
pub fn parse_catalog_file(path: &Path, source_locale: &str) -> Result<ExistingCatalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    if !json.is_object() {
        bail!("Root of catalog file must be an object: {}", path.display());
    }

    let mut catalog = ExistingCatalog::default();
    flatten_json(&json, String::new(), source_locale, &mut catalog);
    Ok(catalog)
}

fn is_record(map: &Map<String, Value>, source_locale: &str) -> bool {
    matches!(map.get(source_locale), Some(Value::String(_)))
        && map.values().all(|v| v.is_string())
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn flatten_json(value: &Value, prefix: String, source_locale: &str, result: &mut ExistingCatalog) {
    match value {
        Value::Object(map) if !prefix.is_empty() && is_record(map, source_locale) => {
            if let Some(Value::String(text)) = map.get(source_locale) {
                result.texts.insert(collapse_whitespace(text));
            }
            result.keys.insert(prefix);
        }
        Value::Object(map) => {
            for (key, val) in map {
                flatten_json(val, join_key(&prefix, key), source_locale, result);
            }
        }
        Value::String(s) => {
            result.texts.insert(collapse_whitespace(s));
            result.keys.insert(prefix);
        }
        Value::Array(arr) => {
            // String arrays are one message; other arrays are indexed.
            if arr.iter().all(|v| v.is_string()) {
                for s in arr.iter().filter_map(|v| v.as_str()) {
                    result.texts.insert(collapse_whitespace(s));
                }
                if !arr.is_empty() {
                    result.keys.insert(prefix);
                }
            } else {
                for (index, val) in arr.iter().enumerate() {
                    flatten_json(val, join_key(&prefix, &index.to_string()), source_locale, result);
                }
            }
        }
        _ => {}
    }
}
