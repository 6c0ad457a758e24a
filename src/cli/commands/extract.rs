use anyhow::Result;

use super::super::args::ExtractArgs;
use super::{CommandResult, CommandSummary, ExtractSummary, PreviewRow};
use crate::core::{
    ExtractContext,
    emit::{plan_locale_files, preview, records_writer},
};

pub fn extract(args: ExtractArgs) -> Result<CommandResult> {
    let ctx = ExtractContext::new(&args)?;
    let build = ctx.build_result();
    let catalog = &build.catalog;
    let locales = ctx.locales();

    // Every document is prepared before the first write.
    let records = records_writer(catalog, locales, &ctx.output);
    let locale_plans = match &ctx.locales_dir {
        Some(dir) => plan_locale_files(catalog, locales, dir)?,
        None => Vec::new(),
    };

    if !ctx.dry_run {
        records.save()?;
        for plan in &locale_plans {
            plan.save()?;
        }
    }
    let locale_files = locale_plans.into_iter().map(|plan| plan.summary).collect();

    let shown = preview(catalog, ctx.preview_limit);
    let rows = shown
        .entries
        .iter()
        .map(|entry| PreviewRow {
            key: entry.key.clone(),
            source: entry.source.clone(),
            target: entry.target.clone(),
        })
        .collect();

    let mut skipped_files = ctx.load_issues.clone();
    skipped_files.extend(build.issues.iter().cloned());
    skipped_files.sort();

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            source_root: ctx.source_root.clone(),
            files_scanned: build.files_scanned,
            unique_keys: catalog.len(),
            collisions: catalog.collisions(),
            covered: build.covered_count,
            need_translation: catalog.untranslated_count(),
            unreadable_paths: ctx.unreadable_paths,
            skipped_files,
            file_stats: build.file_stats.clone(),
            output: ctx.output.clone(),
            is_dry_run: ctx.dry_run,
            locale_files,
            preview: rows,
            preview_remaining: shown.remaining,
        }),
    })
}
