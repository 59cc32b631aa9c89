//! i18n-extract - localizable string extraction
//!
//! Scans a source tree for human-readable literals, keeps the ones that look
//! translatable, derives a stable key for each, groups them per source
//! directory and writes one JSON catalog per namespace and language, plus a
//! plain-text audit report.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction pipeline (discovery, scanning, filtering, keys, aggregation)
//! - `error`: Error taxonomy of an extraction run
//! - `utils`: Shared utility functions
//! - `writers`: Catalog and report sinks

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
pub mod writers;
