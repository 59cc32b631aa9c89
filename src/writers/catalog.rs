use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{
    config::CATALOG_EXTENSION,
    core::data::{Catalog, CatalogEntries, Namespace},
    error::{ExtractError, Result},
};

/// Path of a catalog file: `{locales_root}/{language}/{namespace}.json`.
pub fn catalog_path(locales_root: &Path, catalog: &Catalog) -> PathBuf {
    locales_root
        .join(catalog.language)
        .join(format!("{}.{}", catalog.namespace, CATALOG_EXTENSION))
}

/// Render catalog entries as pretty JSON (2-space indentation) with a
/// trailing newline.
pub fn render_catalog(entries: &CatalogEntries, path: &Path) -> Result<String> {
    let content = serde_json::to_string_pretty(&Value::Object(entries.clone())).map_err(
        |source| ExtractError::Serialize {
            path: path.to_path_buf(),
            source,
        },
    )?;
    Ok(format!("{}\n", content))
}

/// Write one catalog, creating parent directories as needed.
///
/// The file is replaced wholesale; nothing from a previous run is merged.
pub fn write_catalog(locales_root: &Path, catalog: &Catalog) -> Result<PathBuf> {
    let path = catalog_path(locales_root, catalog);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ExtractError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let content = render_catalog(catalog.entries, &path)?;
    fs::write(&path, content).map_err(|source| ExtractError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Write every `(namespace, language)` catalog and return the paths in write
/// order.
///
/// Two namespaces with the same external name map to the same file, so the
/// later namespace replaces the earlier one's catalog.
pub fn write_catalogs(
    locales_root: &Path,
    namespaces: &[Namespace],
    languages: &[String],
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for namespace in namespaces {
        for catalog in namespace.catalogs(languages) {
            written.push(write_catalog(locales_root, &catalog)?);
        }
    }
    Ok(written)
}
