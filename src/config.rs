use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".extractrc.json";

/// Extension of every catalog file written under the locales directory.
pub const CATALOG_EXTENSION: &str = "json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    #[serde(default = "default_ignore_tags")]
    pub ignore_tags: Vec<String>,
    #[serde(default = "default_ignore_classes")]
    pub ignore_classes: Vec<String>,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    #[serde(default = "default_report_path")]
    pub report_path: String,
    #[serde(default = "default_root_namespace")]
    pub root_namespace: String,
    #[serde(default)]
    pub strict_keys: bool,
}

fn default_extensions() -> Vec<String> {
    ["tsx", "ts"].map(String::from).to_vec()
}

fn default_excluded_dirs() -> Vec<String> {
    ["node_modules", "dist"].map(String::from).to_vec()
}

fn default_ignore_tags() -> Vec<String> {
    [
        "div", "span", "p", "h1", "h2", "h3", "h4", "h5", "h6", "button", "input", "label",
    ]
    .map(String::from)
    .to_vec()
}

fn default_ignore_classes() -> Vec<String> {
    ["container", "row", "col", "btn", "form-control"]
        .map(String::from)
        .to_vec()
}

fn default_languages() -> Vec<String> {
    ["en", "zh"].map(String::from).to_vec()
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_locales_dir() -> String {
    "locales".to_string()
}

fn default_report_path() -> String {
    "translation-report.txt".to_string()
}

fn default_root_namespace() -> String {
    "common".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
            ignores: Vec::new(),
            ignore_texts: Vec::new(),
            ignore_tags: default_ignore_tags(),
            ignore_classes: default_ignore_classes(),
            languages: default_languages(),
            source_language: default_source_language(),
            locales_dir: default_locales_dir(),
            report_path: default_report_path(),
            root_namespace: default_root_namespace(),
            strict_keys: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid, if no
    /// target language is configured, or if the source language is not one
    /// of the target languages.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.languages.is_empty() {
            bail!("'languages' must list at least one target language");
        }

        if !self.languages.contains(&self.source_language) {
            bail!(
                "'sourceLanguage' \"{}\" is not listed in 'languages' ({})",
                self.source_language,
                self.languages.join(", ")
            );
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when built-in defaults are used.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
