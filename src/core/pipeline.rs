//! Catalog building across the whole file set.
//!
//! Files are scanned in parallel, but candidates enter the catalog serially
//! in sorted file order, so first-write-wins picks the same winner on every
//! run.

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::Path,
};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::{
    core::{
        catalog::{Candidate, Catalog, InsertOutcome},
        extract::{FileTexts, RecognizerKind, TextExtractor},
        parsers::json::ExistingCatalog,
        translate::Translator,
    },
    issues::{SkippedFileIssue, SkippedFileType},
};

/// Extraction result for one source file.
pub struct FileScan {
    pub file_path: String,
    /// Name recorded in catalog entry origins.
    pub origin: String,
    pub texts: Result<FileTexts>,
}

/// Per-file numbers for verbose output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStat {
    pub origin: String,
    /// Raw fragments per recognizer.
    pub fragments: BTreeMap<RecognizerKind, usize>,
    pub texts: usize,
    pub inserted: usize,
}

/// Everything a pipeline run produces.
#[derive(Debug, Default)]
pub struct BuildResult {
    pub catalog: Catalog,
    /// Distinct texts skipped because an existing catalog already has them.
    pub covered_count: usize,
    pub files_scanned: usize,
    pub file_stats: Vec<FileStat>,
    pub issues: Vec<SkippedFileIssue>,
}

/// Name of `file_path` relative to `base_dir`, with `/` separators.
pub fn origin_name(file_path: &str, base_dir: &Path) -> String {
    let path = Path::new(file_path);
    let relative = path.strip_prefix(base_dir).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn read_source(file_path: &str) -> Result<String> {
    fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read source file: {}", file_path))
}

/// Read and extract every file. Runs in parallel; output keeps input order.
pub fn scan_sources(files: &[String], base_dir: &Path, extractor: &TextExtractor) -> Vec<FileScan> {
    files
        .par_iter()
        .map(|file_path| FileScan {
            file_path: file_path.clone(),
            origin: origin_name(file_path, base_dir),
            texts: read_source(file_path).map(|content| extractor.extract(&content)),
        })
        .collect()
}

/// Fold scanned files into a catalog, in the order given.
pub fn build_catalog(
    scans: Vec<FileScan>,
    translator: &Translator<'_>,
    existing: &ExistingCatalog,
) -> BuildResult {
    let mut result = BuildResult {
        files_scanned: scans.len(),
        ..Default::default()
    };
    let mut covered: HashSet<String> = HashSet::new();

    for scan in scans {
        let texts = match scan.texts {
            Ok(texts) => texts,
            Err(e) => {
                result.issues.push(SkippedFileIssue::from_error(
                    SkippedFileType::Source,
                    scan.file_path,
                    &e,
                ));
                continue;
            }
        };

        let mut stat = FileStat {
            origin: scan.origin,
            fragments: texts.fragments,
            texts: texts.texts.len(),
            inserted: 0,
        };

        for text in texts.texts {
            let candidate = Candidate::new(text);
            if existing.covers(&candidate.qualified_key(), &candidate.text) {
                covered.insert(candidate.text);
                continue;
            }
            if result.catalog.insert(candidate, &stat.origin, translator) == InsertOutcome::Inserted {
                stat.inserted += 1;
            }
        }

        result.file_stats.push(stat);
    }

    result.covered_count = covered.len();
    result
}
