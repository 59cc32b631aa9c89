use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::{
    cli::exit_status::ExitStatus,
    config::{CONFIG_FILE_NAME, default_config_json},
};

/// Write a default config file into `dir`, refusing to overwrite one.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    let (created, status) = if config_path.exists() {
        (false, ExitStatus::Failure)
    } else {
        fs::write(&config_path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        (true, ExitStatus::Success)
    };

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            path: config_path,
            created,
        }),
        status,
    })
}
