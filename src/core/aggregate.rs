//! Namespace aggregation.
//!
//! Records are partitioned by source directory. Within a namespace, a key
//! produced twice keeps the value of the later record (last write wins) and
//! nothing is reported at this level. That silently drops the earlier text
//! when two different literals collapse to one key, so the number of such
//! collisions is returned for the caller to surface, and `disambiguate_keys`
//! offers an opt-in suffixing pass that avoids the loss.

use std::collections::{HashMap, hash_map::Entry};

use serde_json::Value;

use super::data::{CatalogEntries, ExtractionRecord, Namespace};

/// Output of [`aggregate`].
#[derive(Debug, Default)]
pub struct Aggregation {
    /// Namespaces in order of their first record.
    pub namespaces: Vec<Namespace>,
    /// Number of times a key was overwritten with a different value.
    pub collisions: usize,
}

/// External name of the namespace for a source directory.
pub fn namespace_name(dir: &str, root_namespace: &str) -> String {
    match dir.rsplit('/').next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => root_namespace.to_string(),
    }
}

/// Group records by directory and merge each group into one dictionary.
pub fn aggregate(records: &[ExtractionRecord], root_namespace: &str) -> Aggregation {
    let mut aggregation = Aggregation::default();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let dir = record.dir();
        let position = *index.entry(dir).or_insert_with(|| {
            aggregation.namespaces.push(Namespace {
                dir: dir.to_string(),
                name: namespace_name(dir, root_namespace),
                entries: CatalogEntries::new(),
            });
            aggregation.namespaces.len() - 1
        });

        let entries = &mut aggregation.namespaces[position].entries;
        let value = Value::String(record.value.clone());
        if let Some(previous) = entries.insert(record.key.clone(), value)
            && previous.as_str() != Some(record.value.as_str())
        {
            aggregation.collisions += 1;
        }
    }

    aggregation
}

/// Rename colliding keys so no value is lost during aggregation.
///
/// Within each directory, a record whose key is already taken by a different
/// text gets the first free `key_N` suffix (`N` starting at 2). Repeated
/// occurrences of the same text keep sharing one key.
pub fn disambiguate_keys(records: &mut [ExtractionRecord]) {
    let mut taken: HashMap<String, HashMap<String, String>> = HashMap::new();

    for record in records.iter_mut() {
        let keys = taken.entry(record.dir().to_string()).or_default();

        let mut candidate = record.key.clone();
        let mut suffix = 2;
        loop {
            match keys.entry(candidate) {
                Entry::Vacant(slot) => {
                    record.key = slot.key().clone();
                    slot.insert(record.value.clone());
                    break;
                }
                Entry::Occupied(slot) if *slot.get() == record.value => {
                    record.key = slot.key().clone();
                    break;
                }
                Entry::Occupied(_) => {
                    candidate = format!("{}_{}", record.key, suffix);
                    suffix += 1;
                }
            }
        }
    }
}
