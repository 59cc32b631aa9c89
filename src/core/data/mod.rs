//! Core data types shared by every pipeline stage.
//!
//! ## Module Structure
//!
//! - `record`: scanner output (Category, Candidate, ExtractionRecord)
//! - `catalog`: aggregated output (Namespace, Catalog)

pub mod catalog;
pub mod record;

pub use catalog::{Catalog, CatalogEntries, Namespace};
pub use record::{Candidate, Category, ExtractionRecord};
