use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::{
    cli::args::ExtractArgs,
    config::{Config, load_config},
};

/// Resolved settings for one extraction run.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--languages en,de`)
/// 2. `.extractrc.json` found from the root upwards
/// 3. Built-in defaults
#[derive(Debug)]
pub struct ExtractContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory that is scanned and that catalogs are written under.
    pub root_dir: PathBuf,

    /// Where the report goes. CLI paths are taken as given, config paths
    /// are relative to the root.
    pub report_path: PathBuf,

    /// Config file that was loaded, `None` for built-in defaults.
    pub config_path: Option<PathBuf>,

    pub dry_run: bool,
    pub verbose: bool,
}

impl ExtractContext {
    /// Create a new `ExtractContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The root is not an existing directory
    /// - The config file is unreadable or invalid
    /// - CLI overrides leave the source language outside the target languages
    pub fn new(args: &ExtractArgs) -> Result<Self> {
        let root_dir = args
            .common
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        if !root_dir.is_dir() {
            bail!(
                "Source root does not exist or is not a directory: {}",
                root_dir.display()
            );
        }

        let loaded = load_config(&root_dir)?;
        let mut config = loaded.config;

        if !args.languages.is_empty() {
            config.languages = args.languages.clone();
        }
        if let Some(ref source_language) = args.source_language {
            config.source_language = source_language.clone();
        }
        if let Some(ref locales_dir) = args.locales_dir {
            config.locales_dir = locales_dir.to_string_lossy().to_string();
        }
        if args.strict_keys {
            config.strict_keys = true;
        }

        config.validate()?;

        let report_path = match &args.report {
            Some(path) => path.clone(),
            None => resolve_in_root(&root_dir, &config.report_path),
        };

        Ok(Self {
            config,
            root_dir,
            report_path,
            config_path: loaded.source,
            dry_run: args.dry_run,
            verbose: args.common.verbose,
        })
    }
}

fn resolve_in_root(root: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}
