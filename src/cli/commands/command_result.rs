use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

/// Key count of one namespace, for verbose output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceSummary {
    pub name: String,
    /// Source directory relative to the root.
    pub dir: String,
    pub key_count: usize,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub file_count: usize,
    pub record_count: usize,
    pub namespaces: Vec<NamespaceSummary>,
    pub languages: Vec<String>,
    pub source_language: String,
    /// Keys overwritten with a different value during aggregation.
    pub collisions: usize,
    /// Config file that was loaded, `None` for built-in defaults.
    pub config_path: Option<PathBuf>,
    pub catalog_paths: Vec<PathBuf>,
    pub report_path: PathBuf,
    /// Rendered report, kept only for dry runs.
    pub dry_run_report: Option<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False when a config file already existed and nothing was written.
    pub created: bool,
}

/// Result of running a command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}
