//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan the source tree and write locale catalogs plus the report
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that scan a source tree.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source root directory to scan (default: current directory)
    #[arg(long, env = "I18N_EXTRACT_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Report file path (overrides config file)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Target languages, comma separated (overrides config file)
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Language the literals are written in (overrides config file)
    #[arg(long)]
    pub source_language: Option<String>,

    /// Catalog output directory, relative to the root (overrides config file)
    #[arg(long)]
    pub locales_dir: Option<PathBuf>,

    /// Give colliding keys a numeric suffix instead of overwriting
    #[arg(long)]
    pub strict_keys: bool,

    /// Print the report instead of writing catalogs and the report file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings into per-namespace locale catalogs
    Extract(ExtractCommand),
    /// Initialize a new .extractrc.json configuration file
    Init,
}
