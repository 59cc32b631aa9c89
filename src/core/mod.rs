//! Core extraction engine.
//!
//! The pipeline runs in five in-memory stages followed by two sinks:
//!
//! 1. **Discovery** (`file_scanner`): source files under the root
//! 2. **Scanning** (`scanner`): per-line regex rules surface candidates
//! 3. **Filtering** (`filter`): keep human-facing text only
//! 4. **Key synthesis** (`key`): slug identifier per accepted literal
//! 5. **Aggregation** (`aggregate`): one dictionary per source directory
//!
//! The sinks live in `crate::writers`. `pipeline` ties the stages together
//! and `context` resolves configuration for a CLI invocation.

pub mod aggregate;
pub mod context;
pub mod data;
pub mod file_scanner;
pub mod filter;
pub mod key;
pub mod pipeline;
pub mod scanner;

pub use aggregate::{Aggregation, aggregate, disambiguate_keys};
pub use context::ExtractContext;
pub use data::{Candidate, Catalog, Category, ExtractionRecord, Namespace};
pub use pipeline::{ExtractionRun, WrittenFiles, extract};
