use std::{
    cell::OnceCell,
    path::{Component, Path, PathBuf},
};

use anyhow::{Result, bail};
use colored::Colorize;

use crate::{
    cli::args::ExtractArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        emit::Locales,
        extract::TextExtractor,
        file_scanner::{ScanOptions, scan_files},
        parsers::json::{ExistingCatalog, parse_catalog_file},
        pipeline::{BuildResult, build_catalog, scan_sources},
        translate::{Dictionary, Translator, load_dictionary_file},
    },
    issues::{SkippedFileIssue, SkippedFileType},
};

/// Resolve a config path against the project root.
///
/// Absolute paths are kept; relative ones are joined to `root_dir` unless the
/// root is the current directory.
fn resolve_path(root_dir: &Path, p: &str) -> PathBuf {
    let p = Path::new(p);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}

/// Everything an extraction run needs, loaded once up front.
///
/// The catalog itself is built lazily on first access through
/// [`ExtractContext::build_result`].
pub struct ExtractContext {
    pub config: Config,
    pub root_dir: PathBuf,
    pub source_root: PathBuf,
    /// Source files to scan, sorted.
    pub files: Vec<String>,
    pub dictionary: Dictionary,
    pub existing: ExistingCatalog,
    pub extractor: TextExtractor,
    pub output: PathBuf,
    pub locales_dir: Option<PathBuf>,
    pub preview_limit: usize,
    pub dry_run: bool,
    pub verbose: bool,
    /// Directory entries the scanner could not access.
    pub unreadable_paths: usize,
    /// Dictionary and existing catalog files that were skipped.
    pub load_issues: Vec<SkippedFileIssue>,
    build: OnceCell<BuildResult>,
}

impl ExtractContext {
    pub fn new(args: &ExtractArgs) -> Result<Self> {
        let verbose = args.verbose;
        let root_dir = args.root.clone();

        let config_result = load_config(&root_dir)?;

        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        // CLI > config file > defaults
        if let Some(preview) = args.preview {
            config.preview_limit = preview;
        }

        let source_root = match &args.source_root {
            Some(p) => p.clone(),
            None => resolve_path(&root_dir, &config.source_root),
        };
        if !source_root.is_dir() {
            bail!(
                "Source root '{}' does not exist or is not a directory",
                source_root.display()
            );
        }

        let output = match &args.output {
            Some(p) => p.clone(),
            None => resolve_path(&root_dir, &config.output),
        };
        let locales_dir = match &args.locales_dir {
            Some(p) => Some(p.clone()),
            None => config.locales_dir.as_deref().map(|p| resolve_path(&root_dir, p)),
        };

        let extractor = TextExtractor::new(&config.checked_attributes, &config.reserved_prefixes)?;

        let (scan_result, (dictionary, existing, load_issues)) = rayon::join(
            || {
                let options = ScanOptions {
                    includes: &config.includes,
                    ignores: &config.ignores,
                    extensions: &config.extensions,
                    ignore_test_files: config.ignore_test_files,
                };
                scan_files(&source_root, &options, verbose)
            },
            || {
                let mut issues = Vec::new();
                let dictionary = load_dictionary(&config, &root_dir, &mut issues);
                let existing = load_existing_catalogs(&config, &root_dir, &mut issues);
                (dictionary, existing, issues)
            },
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            preview_limit: config.preview_limit,
            config,
            root_dir,
            source_root,
            files: scan_result.files,
            dictionary,
            existing,
            extractor,
            output,
            locales_dir,
            dry_run: args.dry_run,
            verbose,
            unreadable_paths: scan_result.skipped_count,
            load_issues,
            build: OnceCell::new(),
        })
    }

    pub fn locales(&self) -> Locales<'_> {
        Locales {
            source: &self.config.source_locale,
            target: &self.config.target_locale,
        }
    }

    /// Scan all files and build the catalog (lazy initialization).
    ///
    /// File reading and extraction run in parallel; insertion follows the
    /// sorted file order.
    pub fn build_result(&self) -> &BuildResult {
        self.build.get_or_init(|| {
            let scans = scan_sources(&self.files, &self.source_root, &self.extractor);
            build_catalog(scans, &Translator::new(&self.dictionary), &self.existing)
        })
    }
}

/// Built-in dictionary, with the configured user dictionary in front of it.
///
/// An unusable user dictionary is reported and the built-in one is used alone.
fn load_dictionary(config: &Config, root_dir: &Path, issues: &mut Vec<SkippedFileIssue>) -> Dictionary {
    let Some(path) = &config.dictionary else {
        return Dictionary::builtin();
    };
    let path = resolve_path(root_dir, path);
    match load_dictionary_file(&path) {
        Ok(overrides) => Dictionary::with_overrides(overrides),
        Err(e) => {
            issues.push(SkippedFileIssue::from_error(
                SkippedFileType::Dictionary,
                path.to_string_lossy(),
                &e,
            ));
            Dictionary::builtin()
        }
    }
}

fn load_existing_catalogs(
    config: &Config,
    root_dir: &Path,
    issues: &mut Vec<SkippedFileIssue>,
) -> ExistingCatalog {
    let mut existing = ExistingCatalog::default();
    for path in &config.existing_catalogs {
        let path = resolve_path(root_dir, path);
        match parse_catalog_file(&path, &config.source_locale) {
            Ok(catalog) => existing.merge(catalog),
            Err(e) => issues.push(SkippedFileIssue::from_error(
                SkippedFileType::Catalog,
                path.to_string_lossy(),
                &e,
            )),
        }
    }
    existing
}
