use std::fmt;

/// Syntactic category of a surfaced literal.
///
/// The declaration order is also the order in which the scanner applies its
/// rules on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Text between a pair of double quotes: `"Save File"`
    Quoted,
    /// Inline element text between an opening and a closing tag: `<b>Save</b>`
    Markup,
    /// Text between a pair of back-ticks without interpolation: `` `Save` ``
    Block,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Quoted => "quoted",
            Category::Markup => "markup",
            Category::Block => "block",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal surfaced by the scanner, before the filter accepts or rejects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub value: String,
    /// Line number (1-indexed).
    pub line: usize,
    pub category: Category,
}

/// One accepted literal with its synthesized key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRecord {
    pub key: String,
    pub value: String,
    /// Path relative to the scan root, `/`-separated.
    pub file: String,
    /// Line number (1-indexed).
    pub line: usize,
    pub category: Category,
}

impl ExtractionRecord {
    /// Directory part of `file`, the grouping key for namespaces.
    ///
    /// Empty for files that sit directly in the scan root.
    pub fn dir(&self) -> &str {
        self.file.rsplit_once('/').map_or("", |(dir, _)| dir)
    }
}
