use std::{fs, path::Path};

use crate::{
    core::data::ExtractionRecord,
    error::{ExtractError, Result},
};

/// Format one report line: `{file}:{line} - [{category}] "{value}" -> {key}`.
pub fn format_record(record: &ExtractionRecord) -> String {
    format!(
        "{}:{} - [{}] \"{}\" -> {}",
        record.file, record.line, record.category, record.value, record.key
    )
}

/// Render all records in scan order, one per line, without a trailing newline.
pub fn render_report(records: &[ExtractionRecord]) -> String {
    records
        .iter()
        .map(format_record)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the report to `path`, replacing any previous report.
pub fn write_report(path: &Path, records: &[ExtractionRecord]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ExtractError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, render_report(records)).map_err(|source| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    })
}
