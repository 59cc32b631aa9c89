use std::collections::HashSet;

use crate::{
    config::Config,
    utils::{is_all_digits, is_identifier_like},
};

const FORBIDDEN_CHARS: [char; 4] = ['<', '>', '{', '}'];

/// Heuristic predicate deciding whether a candidate is human-facing text.
///
/// Tag and class denylists compare case-insensitively; `ignore_texts`
/// compares exactly.
#[derive(Debug, Clone, Default)]
pub struct ExtractionFilter {
    ignore_tags: HashSet<String>,
    ignore_classes: HashSet<String>,
    ignore_texts: HashSet<String>,
}

impl ExtractionFilter {
    pub fn new<S: AsRef<str>>(ignore_tags: &[S], ignore_classes: &[S], ignore_texts: &[S]) -> Self {
        let lowercase = |items: &[S]| {
            items
                .iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect::<HashSet<_>>()
        };

        Self {
            ignore_tags: lowercase(ignore_tags),
            ignore_classes: lowercase(ignore_classes),
            ignore_texts: ignore_texts.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.ignore_tags,
            &config.ignore_classes,
            &config.ignore_texts,
        )
    }

    /// Returns true when `text` should be extracted.
    pub fn accepts(&self, text: &str) -> bool {
        if text.chars().count() <= 1 {
            return false;
        }
        if is_all_digits(text) || is_identifier_like(text) {
            return false;
        }
        if text.contains(FORBIDDEN_CHARS) {
            return false;
        }
        if text.trim().is_empty() {
            return false;
        }

        let lowered = text.to_lowercase();
        if self.ignore_tags.contains(&lowered) || self.ignore_classes.contains(&lowered) {
            return false;
        }

        !self.ignore_texts.contains(text)
    }
}
