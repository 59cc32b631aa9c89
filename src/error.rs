//! Error taxonomy for an extraction run.
//!
//! Every variant is fatal: the pipeline never retries and never downgrades a
//! failure to a warning. The CLI layer wraps these in `anyhow` and maps them
//! to an exit status.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("source root is not a readable directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("cannot walk source tree under {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize catalog {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
