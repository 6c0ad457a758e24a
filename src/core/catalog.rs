//! Catalog Builder data structures.
//!
//! The catalog maps fully-qualified keys (`namespace.derived_key`) to entries.
//! Keys are unique: a candidate colliding with an existing key only adds its
//! file to the entry's origins. The first text and translation seen for a key
//! are kept (first-write-wins), so re-running over a growing file set never
//! rewrites an already reviewed entry.

use std::collections::{BTreeMap, BTreeSet, btree_map::Entry};

use crate::core::{
    key::derive_key,
    translate::{Translation, TranslationKind, Translator},
};

/// Namespace assigned to a candidate from its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Buttons,
    Errors,
    Placeholders,
    Labels,
    Common,
}

impl Category {
    /// Keyword sniffing on lower-cased text; the first matching rule wins.
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("button") || lower.contains("clic") {
            Category::Buttons
        } else if lower.contains("error") || lower.contains("erreur") {
            Category::Errors
        } else if lower.contains("placeholder") {
            Category::Placeholders
        } else if lower.contains("label") {
            Category::Labels
        } else {
            Category::Common
        }
    }

    pub fn namespace(&self) -> &'static str {
        match self {
            Category::Buttons => "ui.buttons",
            Category::Errors => "ui.errors",
            Category::Placeholders => "ui.placeholders",
            Category::Labels => "ui.labels",
            Category::Common => "pages.common",
        }
    }
}

/// A sanitized text fragment proposed for localization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub key: String,
    pub category: Category,
}

impl Candidate {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            key: derive_key(&text),
            category: Category::classify(&text),
            text,
        }
    }

    /// Category namespace plus derived key.
    pub fn qualified_key(&self) -> String {
        format!("{}.{}", self.category.namespace(), self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: String,
    pub source: String,
    pub target: String,
    pub translation_kind: TranslationKind,
    /// Files the text was found in.
    pub origins: BTreeSet<String>,
}

/// What happened to a candidate offered to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new entry was created.
    Inserted,
    /// The key already existed; only the origin set changed.
    Merged,
}

/// Deduplicated, keyed set of extracted text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
    collisions: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate found in `origin`.
    ///
    /// The translation is resolved only when a new entry is created.
    pub fn insert(
        &mut self,
        candidate: Candidate,
        origin: &str,
        translator: &Translator<'_>,
    ) -> InsertOutcome {
        match self.entries.entry(candidate.qualified_key()) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().origins.insert(origin.to_string());
                self.collisions += 1;
                InsertOutcome::Merged
            }
            Entry::Vacant(vacant) => {
                let Translation { text, kind } = translator.resolve(&candidate.text);
                let key = vacant.key().clone();
                vacant.insert(CatalogEntry {
                    key,
                    source: candidate.text,
                    target: text,
                    translation_kind: kind,
                    origins: BTreeSet::from([origin.to_string()]),
                });
                InsertOutcome::Inserted
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries sorted by fully-qualified key.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of candidates merged into an existing entry.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Number of entries whose translation fell back to the source text.
    pub fn untranslated_count(&self) -> usize {
        self.entries
            .values()
            .filter(|e| e.translation_kind.needs_review())
            .count()
    }
}
