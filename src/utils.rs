//! Common utility functions shared across the codebase.

use std::path::{Component, Path};

/// Checks if the text is a non-empty run of ASCII decimal digits.
///
/// # Examples
///
/// ```
/// use i18n_extract::utils::is_all_digits;
///
/// assert!(is_all_digits("42"));
/// assert!(!is_all_digits("4.2"));
/// assert!(!is_all_digits(""));
/// ```
pub fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Checks if the text looks like a bare identifier: ASCII letters, digits and
/// underscores, not starting with a digit.
///
/// # Examples
///
/// ```
/// use i18n_extract::utils::is_identifier_like;
///
/// assert!(is_identifier_like("myVariable"));
/// assert!(is_identifier_like("_private"));
/// assert!(!is_identifier_like("2fast"));
/// assert!(!is_identifier_like("Save File"));
/// assert!(!is_identifier_like("über"));
/// ```
pub fn is_identifier_like(text: &str) -> bool {
    let mut bytes = text.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() || first == b'_' => {
            bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
        }
        _ => false,
    }
}

/// Renders a relative path with `/` separators regardless of platform.
///
/// Report lines and namespace grouping depend on this form, so output is
/// identical across operating systems.
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
