//! Turning a built catalog into output documents.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::{Map, Value};

use crate::{
    core::catalog::{Catalog, CatalogEntry},
    json_writer::{JsonWriter, KeyAction},
};

/// Locale codes used as record fields and locale file names.
#[derive(Debug, Clone, Copy)]
pub struct Locales<'a> {
    pub source: &'a str,
    pub target: &'a str,
}

/// `{ "<source>": text, "<target>": translation }` for one entry.
pub fn record(entry: &CatalogEntry, locales: Locales<'_>) -> Value {
    let mut record = Map::new();
    record.insert(locales.source.to_string(), Value::String(entry.source.clone()));
    record.insert(locales.target.to_string(), Value::String(entry.target.clone()));
    Value::Object(record)
}

/// The record set document, one record per key in key order.
pub fn records_writer(catalog: &Catalog, locales: Locales<'_>, path: &Path) -> JsonWriter {
    let mut writer = JsonWriter::create(path);
    for entry in catalog.entries() {
        writer.set_flat(&entry.key, record(entry, locales));
    }
    writer
}

/// Counts for one per-locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFileSummary {
    pub path: PathBuf,
    pub added: usize,
    pub kept: usize,
    pub conflicts: usize,
}

/// A locale file merged in memory, not yet written.
pub struct LocaleFilePlan {
    writer: JsonWriter,
    pub summary: LocaleFileSummary,
}

impl LocaleFilePlan {
    /// Write the merged document. Files that gained nothing are left alone.
    pub fn save(&self) -> Result<()> {
        if self.summary.added > 0 {
            self.writer.save()?;
        }
        Ok(())
    }
}

fn plan_locale_file<'c>(
    path: PathBuf,
    values: impl Iterator<Item = (&'c str, &'c str)>,
) -> Result<LocaleFilePlan> {
    let mut writer = JsonWriter::open_or_create(&path)?;
    let mut summary = LocaleFileSummary {
        path: writer.path().to_path_buf(),
        added: 0,
        kept: 0,
        conflicts: 0,
    };

    for (key, value) in values {
        match writer.add_if_absent(key, Value::String(value.to_string())) {
            KeyAction::Added => summary.added += 1,
            KeyAction::Kept => summary.kept += 1,
            KeyAction::Conflict => summary.conflicts += 1,
        }
    }

    Ok(LocaleFilePlan { writer, summary })
}

/// Merge entries into `<locales_dir>/<locale>.json` for both locales.
///
/// Keys are nested on their dots. Values already present on disk win.
/// Both files are read and merged before anything is written, so an
/// unreadable locale file fails the run without touching the other.
pub fn plan_locale_files(
    catalog: &Catalog,
    locales: Locales<'_>,
    locales_dir: &Path,
) -> Result<Vec<LocaleFilePlan>> {
    let source = plan_locale_file(
        locales_dir.join(format!("{}.json", locales.source)),
        catalog.entries().map(|e| (e.key.as_str(), e.source.as_str())),
    )?;
    let target = plan_locale_file(
        locales_dir.join(format!("{}.json", locales.target)),
        catalog.entries().map(|e| (e.key.as_str(), e.target.as_str())),
    )?;
    Ok(vec![source, target])
}

/// The first entries of a catalog, for console display.
#[derive(Debug)]
pub struct Preview<'c> {
    pub entries: Vec<&'c CatalogEntry>,
    /// Entries beyond the limit.
    pub remaining: usize,
}

pub fn preview(catalog: &Catalog, limit: usize) -> Preview<'_> {
    let entries: Vec<&CatalogEntry> = catalog.entries().take(limit).collect();
    Preview {
        remaining: catalog.len() - entries.len(),
        entries,
    }
}
