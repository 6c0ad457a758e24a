//! Translation Resolver.
//!
//! Resolves a best-effort target-language draft for a candidate text:
//! exact dictionary match, then containment match, then the text itself.
//! Containment is deliberately loose, so every produced translation is a
//! draft to be reviewed.

pub mod dictionary;

use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

pub use dictionary::BUILTIN_DICTIONARY;

/// How a translation was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TranslationKind {
    /// Case-insensitive match of the whole text.
    Exact,
    /// A dictionary phrase contains the text, or the text contains it.
    Containment,
    /// No match: the source text is returned unchanged.
    Identity,
}

impl TranslationKind {
    /// True when the entry still needs a human translation.
    pub fn needs_review(&self) -> bool {
        matches!(self, TranslationKind::Identity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub kind: TranslationKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DictionaryEntry {
    source: String,
    /// Lower-cased `source`, computed once.
    source_lower: String,
    target: String,
}

/// Ordered, immutable bilingual phrase table.
///
/// Built once at startup and shared by reference with the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    /// Build a dictionary from ordered pairs. A repeated source phrase keeps
    /// its first target.
    pub fn from_pairs<S, T>(pairs: impl IntoIterator<Item = (S, T)>) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        let mut dictionary = Self::default();
        dictionary.extend(pairs);
        dictionary
    }

    /// The built-in French to English table.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_DICTIONARY.iter().copied())
    }

    /// User entries first, then built-in entries not overridden by them.
    pub fn with_overrides(overrides: Dictionary) -> Self {
        let mut dictionary = overrides;
        dictionary.extend(BUILTIN_DICTIONARY.iter().copied());
        dictionary
    }

    fn extend<S, T>(&mut self, pairs: impl IntoIterator<Item = (S, T)>)
    where
        S: Into<String>,
        T: Into<String>,
    {
        let mut seen: HashSet<String> = self.entries.iter().map(|e| e.source.clone()).collect();
        for (source, target) in pairs {
            let source = source.into();
            if !seen.insert(source.clone()) {
                continue;
            }
            self.entries.push(DictionaryEntry {
                source_lower: source.to_lowercase(),
                source,
                target: target.into(),
            });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(source, target)` pairs in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
    }
}

/// Read a user dictionary: a JSON object mapping source phrases to targets.
///
/// Entries keep the order of the file.
pub fn load_dictionary_file(path: &Path) -> Result<Dictionary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary file: {}", path.display()))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse dictionary file: {}", path.display()))?;

    let Value::Object(map) = json else {
        bail!("Root of dictionary file must be an object: {}", path.display());
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (source, target) in map {
        match target {
            Value::String(target) => pairs.push((source, target)),
            other => bail!(
                "Dictionary value for \"{}\" must be a string, found {}",
                source,
                other
            ),
        }
    }
    Ok(Dictionary::from_pairs(pairs))
}

/// Resolves translations against a shared dictionary. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> Translator<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn resolve(&self, text: &str) -> Translation {
        let needle = text.trim().to_lowercase();

        if let Some(entry) = self
            .dictionary
            .entries
            .iter()
            .find(|e| e.source_lower == needle)
        {
            return Translation {
                text: entry.target.clone(),
                kind: TranslationKind::Exact,
            };
        }

        if !needle.is_empty()
            && let Some(entry) = self.dictionary.entries.iter().find(|e| {
                !e.source_lower.is_empty()
                    && (needle.contains(&e.source_lower) || e.source_lower.contains(&needle))
            })
        {
            return Translation {
                text: entry.target.clone(),
                kind: TranslationKind::Containment,
            };
        }

        Translation {
            text: text.to_string(),
            kind: TranslationKind::Identity,
        }
    }
}
