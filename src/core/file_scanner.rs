use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::{
    error::{ExtractError, Result},
    utils::to_slash_path,
};

/// A discovered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute (or root-joined) path used for reading.
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated.
    pub relative: String,
}

/// Rules deciding which files under the root are scanned.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryRules {
    /// File extensions without the leading dot (e.g. `tsx`).
    pub extensions: Vec<String>,
    /// Directory names pruned wherever they appear in the tree.
    pub excluded_dirs: Vec<String>,
    /// Glob patterns matched against root-relative paths.
    pub ignores: Vec<Pattern>,
}

/// Dot-prefixed entries below the root (`.git`, `.storybook`, `.eslintrc.ts`)
/// are never scanned.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

impl DiscoveryRules {
    /// Build rules from config values. Invalid glob patterns are dropped;
    /// `Config::validate` has already rejected them for config files.
    pub fn new(extensions: &[String], excluded_dirs: &[String], ignores: &[String]) -> Self {
        Self {
            extensions: extensions.to_vec(),
            excluded_dirs: excluded_dirs.to_vec(),
            ignores: ignores.iter().filter_map(|p| Pattern::new(p).ok()).collect(),
        }
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry.depth() > 0
            && self
                .excluded_dirs
                .iter()
                .any(|name| entry.file_name() == OsStr::new(name))
    }

    fn is_scannable_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    fn is_ignored(&self, relative: &str) -> bool {
        self.ignores.iter().any(|p| p.matches(relative))
    }
}

/// Enumerate the source files under `root`.
///
/// Entries are visited in file-name order, so the result is deterministic for
/// a given filesystem state. Excluded and hidden directories are pruned
/// without being descended into. Symlinks to files are scanned; symlinked
/// directories are not followed. Any traversal error is fatal.
pub fn scan_files(root: &Path, rules: &DiscoveryRules) -> Result<Vec<SourceFile>> {
    if fs::read_dir(root).is_err() {
        return Err(ExtractError::InvalidRoot(root.to_path_buf()));
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry) && !rules.is_excluded_dir(entry));

    for entry in walker {
        let entry = entry.map_err(|source| ExtractError::Walk {
            root: root.to_path_buf(),
            source,
        })?;

        if !entry.path().is_file() || !rules.is_scannable_file(entry.path()) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map(to_slash_path)
            .unwrap_or_else(|_| to_slash_path(entry.path()));

        if rules.is_ignored(&relative) {
            continue;
        }

        files.push(SourceFile {
            path: entry.into_path(),
            relative,
        });
    }

    Ok(files)
}
