use std::path::PathBuf;

use crate::{core::emit::LocaleFileSummary, core::pipeline::FileStat, issues::SkippedFileIssue};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

/// One catalog entry as shown in the console preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub key: String,
    pub source: String,
    pub target: String,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub source_root: PathBuf,
    pub files_scanned: usize,
    pub unique_keys: usize,
    pub collisions: usize,
    pub covered: usize,
    /// Entries whose draft translation is the source text itself.
    pub need_translation: usize,
    /// Directory entries the scanner could not access.
    pub unreadable_paths: usize,
    pub skipped_files: Vec<SkippedFileIssue>,
    pub file_stats: Vec<FileStat>,
    pub output: PathBuf,
    pub is_dry_run: bool,
    pub locale_files: Vec<LocaleFileSummary>,
    pub preview: Vec<PreviewRow>,
    /// Entries left out of the preview.
    pub preview_remaining: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a harvest command.
///
/// Skipped files and untranslated entries are data quality findings and
/// never change the exit status; fatal errors are returned as `Err` instead.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}
