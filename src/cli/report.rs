//! Terminal output for command results.
//!
//! Separate from the pipeline so the crate can be used as a library without
//! printing anything. Every printer has a `_to` variant taking writers, used
//! by tests.

use std::{
    collections::HashSet,
    io::{self, Write},
    path::PathBuf,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract_to(summary, verbose, &mut out, &mut err),
        CommandSummary::Init(summary) => print_init_to(summary, &mut out, &mut err),
    }
}

/// Number of distinct catalog files among `paths`.
fn distinct_catalogs(paths: &[PathBuf]) -> usize {
    paths.iter().collect::<HashSet<_>>().len()
}

/// Catalog files written more than once, which happens when namespaces from
/// different directories share a name.
fn overwritten_catalogs(paths: &[PathBuf]) -> usize {
    let mut seen = HashSet::new();
    paths
        .iter()
        .filter(|path| !seen.insert(*path))
        .collect::<HashSet<_>>()
        .len()
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// Print the outcome of an extraction run.
///
/// Dry runs print the report itself to `out`. Verbose notes go to `err`.
pub fn print_extract_to<W: Write, E: Write>(
    summary: &ExtractSummary,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    if verbose {
        print_verbose_notes_to(summary, err);
    }

    if let Some(report) = &summary.dry_run_report
        && !report.is_empty()
    {
        let _ = writeln!(out, "{}", report);
    }

    let languages = summary
        .languages
        .iter()
        .map(|lang| {
            if *lang == summary.source_language {
                format!("{} (source)", lang)
            } else {
                lang.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} from {} {} into {} {} (languages: {})",
            summary.record_count,
            plural(summary.record_count, "string", "strings"),
            summary.file_count,
            plural(summary.file_count, "file", "files"),
            summary.namespaces.len(),
            plural(summary.namespaces.len(), "namespace", "namespaces"),
            languages
        )
        .green()
    );

    if summary.dry_run_report.is_some() {
        let _ = writeln!(out, "  {}", "dry run: no files written".dimmed());
    } else {
        let catalogs = distinct_catalogs(&summary.catalog_paths);
        let _ = writeln!(
            out,
            "  wrote {} {}, report: {}",
            catalogs,
            plural(catalogs, "catalog", "catalogs"),
            summary.report_path.display().to_string().cyan()
        );
    }
}

fn print_verbose_notes_to<E: Write>(summary: &ExtractSummary, err: &mut E) {
    match &summary.config_path {
        Some(path) => {
            let _ = writeln!(err, "{} using config {}", "note:".bold().cyan(), path.display());
        }
        None => {
            let _ = writeln!(
                err,
                "{} no {} found, using default configuration",
                "note:".bold().cyan(),
                CONFIG_FILE_NAME
            );
        }
    }

    let name_width = summary
        .namespaces
        .iter()
        .map(|ns| ns.name.width())
        .max()
        .unwrap_or(0);

    for ns in &summary.namespaces {
        let padding = " ".repeat(name_width - ns.name.width());
        let dir = if ns.dir.is_empty() { "." } else { ns.dir.as_str() };
        let _ = writeln!(
            err,
            "  {}{}  {} {} ({})",
            ns.name.bold(),
            padding,
            ns.key_count,
            plural(ns.key_count, "key", "keys"),
            dir.dimmed()
        );
    }

    if summary.collisions > 0 {
        let _ = writeln!(
            err,
            "{} {} {} overwritten by later text with the same key (use {} to keep both)",
            "warning:".bold().yellow(),
            summary.collisions,
            plural(summary.collisions, "key was", "keys were"),
            "--strict-keys".cyan()
        );
    }

    let overwritten = overwritten_catalogs(&summary.catalog_paths);
    if overwritten > 0 {
        let _ = writeln!(
            err,
            "{} {} {} written by more than one namespace, only the last one is kept",
            "warning:".bold().yellow(),
            overwritten,
            plural(overwritten, "catalog file was", "catalog files were")
        );
    }
}

pub fn print_init_to<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", summary.path.display()).red()
        );
    }
}
