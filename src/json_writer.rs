use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// Outcome of offering a key to a writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    /// The key already holds a value; it was left untouched.
    Kept,
    /// A parent segment holds a non-object value, so the key cannot be placed.
    Conflict,
}

/// JSON writer for catalog and locale files.
pub struct JsonWriter {
    file_path: PathBuf,
    data: Map<String, Value>,
}

impl JsonWriter {
    /// Start an empty document, replacing `path` on save.
    pub fn create(path: &Path) -> Self {
        Self {
            file_path: path.to_path_buf(),
            data: Map::new(),
        }
    }

    /// Open an existing JSON file or start an empty one.
    pub fn open_or_create(path: &Path) -> Result<Self> {
        let data = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            let value: Value = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
            match value {
                Value::Object(map) => map,
                _ => bail!("Root of JSON file must be an object: {}", path.display()),
            }
        } else {
            Map::new()
        };

        Ok(Self {
            file_path: path.to_path_buf(),
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Set a top-level entry; `key` is used as-is, dots included.
    pub fn set_flat(&mut self, key: &str, value: Value) {
        self.data.insert(key.to_string(), value);
    }

    /// Add a value at a dotted path unless something is already there.
    ///
    /// Key format: "ui.errors.erreur_reseau". Intermediate objects are
    /// created as needed; existing values are never replaced.
    pub fn add_if_absent(&mut self, key: &str, value: Value) -> KeyAction {
        let parts: Vec<&str> = key.split('.').collect();
        insert_nested(&mut self.data, &parts, value)
    }

    /// Serialized document: 2-space indentation and a trailing newline.
    pub fn render(&self) -> Result<String> {
        let content = serde_json::to_string_pretty(&self.data).context("Failed to serialize JSON")?;
        Ok(format!("{}\n", content))
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&self.file_path, self.render()?)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(())
    }
}

fn insert_nested(root: &mut Map<String, Value>, path: &[&str], value: Value) -> KeyAction {
    let Some((first, rest)) = path.split_first() else {
        return KeyAction::Conflict;
    };

    if rest.is_empty() {
        if root.contains_key(*first) {
            return KeyAction::Kept;
        }
        root.insert(first.to_string(), value);
        return KeyAction::Added;
    }

    let next_level = root
        .entry(first.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    match next_level {
        Value::Object(inner) => insert_nested(inner, rest, value),
        _ => KeyAction::Conflict,
    }
}
