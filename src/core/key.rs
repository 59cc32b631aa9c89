use std::sync::LazyLock;

use regex::Regex;

/// Maximum length of a synthesized key.
pub const MAX_KEY_LEN: usize = 50;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static NON_SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Derive a catalog key from literal text.
///
/// Lower-cases, strips markup tags, collapses every run of characters outside
/// `[a-z0-9]` into one underscore, trims underscores and cuts the result to
/// [`MAX_KEY_LEN`] characters. Total and deterministic, but not injective:
/// `"Save file"` and `"Save file!"` share a key.
///
/// # Examples
///
/// ```
/// use i18n_extract::core::key::synthesize_key;
///
/// assert_eq!(synthesize_key("Click Here"), "click_here");
/// assert_eq!(synthesize_key("  Hello, world!  "), "hello_world");
/// assert_eq!(synthesize_key("你好"), "");
/// ```
pub fn synthesize_key(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = TAG_REGEX.replace_all(&lowered, "");
    let slug = NON_SLUG_REGEX.replace_all(&stripped, "_");
    let slug = slug.trim_matches('_');

    // The slug is pure ASCII here, so byte and char positions agree.
    let cut = &slug[..slug.len().min(MAX_KEY_LEN)];
    cut.trim_end_matches('_').to_string()
}
