use serde_json::{Map, Value};

/// Ordered key → text dictionary of one namespace.
///
/// Backed by `serde_json::Map` with `preserve_order`, so keys keep their
/// first-insertion position even when a later record overwrites the value.
pub type CatalogEntries = Map<String, Value>;

/// Accepted records of one source directory merged into a single dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    /// Source directory relative to the scan root (empty for the root itself).
    pub dir: String,
    /// External name, used as the catalog file stem.
    pub name: String,
    pub entries: CatalogEntries,
}

impl Namespace {
    /// Catalogs of this namespace, one per target language.
    ///
    /// No translation happens here: every language shares the source text,
    /// which non-source languages carry as a placeholder until a translator
    /// replaces it.
    pub fn catalogs<'a>(
        &'a self,
        languages: &'a [String],
    ) -> impl Iterator<Item = Catalog<'a>> + 'a {
        languages.iter().map(move |language| Catalog {
            namespace: &self.name,
            language,
            entries: &self.entries,
        })
    }
}

/// The key → text mapping for one `(namespace, language)` pair.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub namespace: &'a str,
    pub language: &'a str,
    pub entries: &'a CatalogEntries,
}
