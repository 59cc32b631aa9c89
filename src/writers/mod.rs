//! Side-effect-only sinks of the pipeline.
//!
//! - `catalog`: per-language, per-namespace JSON catalogs
//! - `report`: the flat audit trail of accepted records

pub mod catalog;
pub mod report;
