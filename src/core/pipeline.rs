//! Extraction pipeline: discovery → scan → filter → key synthesis → aggregation.
//!
//! Everything up to aggregation is pure with respect to the output tree;
//! `ExtractionRun::write` is the only step that touches disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use super::{
    aggregate::{Aggregation, aggregate, disambiguate_keys},
    data::ExtractionRecord,
    file_scanner::{DiscoveryRules, SourceFile, scan_files},
    filter::ExtractionFilter,
    key::synthesize_key,
    scanner::scan_source,
};
use crate::{
    config::Config,
    error::{ExtractError, Result},
    writers::{catalog::write_catalogs, report::write_report},
};

/// In-memory result of one extraction run.
#[derive(Debug)]
pub struct ExtractionRun {
    pub files: Vec<SourceFile>,
    /// Accepted records in scan order.
    pub records: Vec<ExtractionRecord>,
    pub aggregation: Aggregation,
}

/// Files written by [`ExtractionRun::write`].
#[derive(Debug, Default)]
pub struct WrittenFiles {
    pub catalogs: Vec<PathBuf>,
    pub report: PathBuf,
}

/// Read one file and turn its accepted candidates into records.
///
/// Invalid UTF-8 sequences decode to U+FFFD instead of failing the run; only
/// an I/O failure is fatal.
pub fn scan_file(file: &SourceFile, filter: &ExtractionFilter) -> Result<Vec<ExtractionRecord>> {
    let bytes = fs::read(&file.path).map_err(|source| ExtractError::ReadFile {
        path: file.path.clone(),
        source,
    })?;
    let source = String::from_utf8_lossy(&bytes);

    Ok(scan_source(&source)
        .into_iter()
        .filter(|candidate| filter.accepts(&candidate.value))
        .map(|candidate| ExtractionRecord {
            key: synthesize_key(&candidate.value),
            value: candidate.value,
            file: file.relative.clone(),
            line: candidate.line,
            category: candidate.category,
        })
        .collect())
}

/// Run discovery through aggregation under `root`.
///
/// Files are scanned in parallel; the indexed collect keeps per-file results
/// in discovery order, so records, collisions and report lines match a
/// sequential run exactly.
pub fn extract(root: &Path, config: &Config) -> Result<ExtractionRun> {
    let rules = DiscoveryRules::new(&config.extensions, &config.excluded_dirs, &config.ignores);
    let files = scan_files(root, &rules)?;

    let filter = ExtractionFilter::from_config(config);
    let per_file = files
        .par_iter()
        .map(|file| scan_file(file, &filter))
        .collect::<Result<Vec<_>>>()?;

    let mut records: Vec<ExtractionRecord> = per_file.into_iter().flatten().collect();
    if config.strict_keys {
        disambiguate_keys(&mut records);
    }

    let aggregation = aggregate(&records, &config.root_namespace);

    Ok(ExtractionRun {
        files,
        records,
        aggregation,
    })
}

impl ExtractionRun {
    /// Persist every catalog and the report, overwriting previous output.
    ///
    /// Catalogs go to `{root}/{localesDir}/{language}/{namespace}.json`.
    /// A failure part-way leaves the files written so far in place.
    pub fn write(&self, root: &Path, config: &Config, report_path: &Path) -> Result<WrittenFiles> {
        let locales_root = root.join(&config.locales_dir);
        let catalogs =
            write_catalogs(&locales_root, &self.aggregation.namespaces, &config.languages)?;

        write_report(report_path, &self.records)?;

        Ok(WrittenFiles {
            catalogs,
            report: report_path.to_path_buf(),
        })
    }
}
