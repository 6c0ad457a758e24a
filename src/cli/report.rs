//! Console output for command results.
//!
//! Separate from core logic to allow harvest to be used as a library.
//! The summary goes to stdout; skipped-file warnings go to stderr.

use std::{
    borrow::Cow,
    io::{self, Write},
};

use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary, PreviewRow};
use crate::{
    core::pipeline::FileStat,
    issues::{SkippedFileIssue, SkippedFileType},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Display width of source and target text in the preview.
const PREVIEW_TEXT_WIDTH: usize = 40;

const ELLIPSIS: char = '\u{2026}'; // …

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Extract(summary) => {
            print_skipped_to(summary, verbose, &mut io::stderr().lock());
            print_extract_to(summary, verbose, &mut io::stdout().lock());
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Truncate `text` to at most `max_width` display columns, marking the cut.
fn clip(text: &str, max_width: usize) -> Cow<'_, str> {
    if UnicodeWidthStr::width(text) <= max_width {
        return Cow::Borrowed(text);
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut clipped = String::new();
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        clipped.push(c);
    }
    clipped.push(ELLIPSIS);
    Cow::Owned(clipped)
}

/// `4 fragments (tag-body 3, attribute-value 1), 3 texts, 3 new`
fn file_stat_line(stat: &FileStat) -> String {
    let fragments: usize = stat.fragments.values().sum();
    let mut line = plural(fragments, "fragment");
    if !stat.fragments.is_empty() {
        let by_kind: Vec<String> = stat
            .fragments
            .iter()
            .map(|(kind, count)| format!("{} {}", kind, count))
            .collect();
        line.push_str(&format!(" ({})", by_kind.join(", ")));
    }
    format!("{}, {}, {} new", line, plural(stat.texts, "text"), stat.inserted)
}

fn print_skipped_to<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    // Dictionary and catalog files are few and named in the config, so they
    // are always listed; source files are aggregated unless verbose.
    let (sources, others): (Vec<&SkippedFileIssue>, Vec<&SkippedFileIssue>) = summary
        .skipped_files
        .iter()
        .partition(|issue| issue.file_type == SkippedFileType::Source);

    for issue in others {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), issue);
    }

    if verbose {
        for issue in sources {
            let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), issue);
        }
    } else if !sources.is_empty() {
        let _ = writeln!(
            writer,
            "{} {} could not be read (use {} for details)",
            "warning:".bold().yellow(),
            plural(sources.len(), "file"),
            "-v".cyan()
        );
    }
}

fn print_extract_to<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    if verbose {
        for stat in &summary.file_stats {
            let _ = writeln!(writer, "  {} {}: {}", "-->".blue(), stat.origin, file_stat_line(stat));
        }
    }

    let _ = writeln!(
        writer,
        "Scanned {} in {}",
        plural(summary.files_scanned, "source file"),
        summary.source_root.display()
    );
    let _ = writeln!(
        writer,
        "Extracted {}",
        plural(summary.unique_keys, "unique key")
    );
    let _ = writeln!(writer, "  - collisions merged: {}", summary.collisions);
    let _ = writeln!(writer, "  - already covered: {}", summary.covered);
    let _ = writeln!(writer, "  - need translation: {}", summary.need_translation);
    let unreadable = summary.skipped_files.len() + summary.unreadable_paths;
    if unreadable > 0 {
        let _ = writeln!(writer, "  - unreadable: {}", unreadable);
    }

    if summary.is_dry_run {
        let _ = writeln!(
            writer,
            "{} would write {} to {}",
            "Dry run:".yellow().bold(),
            plural(summary.unique_keys, "key"),
            summary.output.display()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Wrote {} to {}",
                plural(summary.unique_keys, "key"),
                summary.output.display()
            )
            .green()
        );
    }

    if !summary.locale_files.is_empty() {
        let heading = if summary.is_dry_run {
            "Would merge into".yellow().bold()
        } else {
            "Merged into".green().bold()
        };
        let _ = writeln!(writer, "{} locale files:", heading);
        for file in &summary.locale_files {
            let mut line = format!(
                "  - {}: {} added, {} kept",
                file.path.display(),
                file.added,
                file.kept
            );
            if file.conflicts > 0 {
                line.push_str(&format!(", {}", plural(file.conflicts, "conflict")));
            }
            let _ = writeln!(writer, "{}", line);
        }
    }

    print_preview_to(&summary.preview, summary.preview_remaining, writer);
}

fn print_preview_to<W: Write>(rows: &[PreviewRow], remaining: usize, writer: &mut W) {
    if rows.is_empty() {
        return;
    }

    let key_width = rows
        .iter()
        .map(|row| UnicodeWidthStr::width(row.key.as_str()))
        .max()
        .unwrap_or(0);

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Preview:".bold());
    for row in rows {
        let padding = key_width - UnicodeWidthStr::width(row.key.as_str());
        let _ = writeln!(
            writer,
            "  {}{:padding$}  {} {} {}",
            row.key.cyan(),
            "",
            clip(&row.source, PREVIEW_TEXT_WIDTH),
            "\u{2192}".blue(), // →
            clip(&row.target, PREVIEW_TEXT_WIDTH),
            padding = padding
        );
    }

    if remaining > 0 {
        let _ = writeln!(writer, "  {} and {} more", ELLIPSIS, remaining);
    }
}

fn print_init(summary: &InitSummary) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}
