//! Line-oriented literal scanner.
//!
//! Three independent regex rules run on every line. This is deliberately not a
//! tokenizer: it finds literal text quickly at the cost of precision, and a
//! literal that spans several lines is never recognized.

use std::sync::LazyLock;

use regex::Regex;

use super::data::{Candidate, Category};

// Matches double-quoted text on one line: "Save File"
static QUOTED_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]+)""#).unwrap());

// Matches inline element text: <button>Save File</button>
// Capture group 1 is the text between the opening tag and the next closing tag.
static MARKUP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>([^<]+)</[^>]*>").unwrap());

// Matches back-tick delimited text on one line: `Save File`
static BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

const INTERPOLATION_MARKER: &str = "${";

/// Surface every candidate in `source`.
///
/// Candidates come out in line order; within a line, all quoted matches come
/// first, then markup, then block, each left to right.
pub fn scan_source(source: &str) -> Vec<Candidate> {
    source
        .lines()
        .enumerate()
        .flat_map(|(idx, line)| scan_line(line, idx + 1))
        .collect()
}

/// Apply the three rules to a single line.
pub fn scan_line(line: &str, line_num: usize) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for cap in QUOTED_REGEX.captures_iter(line) {
        if let Some(m) = cap.get(1) {
            candidates.push(Candidate {
                value: m.as_str().to_string(),
                line: line_num,
                category: Category::Quoted,
            });
        }
    }

    for cap in MARKUP_REGEX.captures_iter(line) {
        if let Some(m) = cap.get(1) {
            candidates.push(Candidate {
                value: m.as_str().trim().to_string(),
                line: line_num,
                category: Category::Markup,
            });
        }
    }

    for cap in BLOCK_REGEX.captures_iter(line) {
        if let Some(m) = cap.get(1)
            && !m.as_str().contains(INTERPOLATION_MARKER)
        {
            candidates.push(Candidate {
                value: m.as_str().to_string(),
                line: line_num,
                category: Category::Block,
            });
        }
    }

    candidates
}
