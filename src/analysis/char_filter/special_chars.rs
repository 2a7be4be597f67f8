//! Special-character removal filter.

use std::collections::HashSet;

use lazy_static::lazy_static;

use super::CharFilter;

/// Punctuation and symbol characters removed by [`SpecialCharsFilter`].
///
/// ASCII punctuation plus currency signs, typographic quotes, and a few
/// miscellaneous symbols. This set is fixed for the lifetime of the process
/// and shared by every filter instance.
pub const SPECIAL_CHARS: &str =
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~±÷×€£¥¢₹₽₴«»„’…·•¶§©®™°µ†‡◊";

lazy_static! {
    static ref SPECIAL_CHAR_SET: HashSet<char> = SPECIAL_CHARS.chars().collect();
}

/// Check whether a character belongs to the special-character set.
pub fn is_special_char(c: char) -> bool {
    SPECIAL_CHAR_SET.contains(&c)
}

/// A char filter that removes every character in [`SPECIAL_CHARS`].
///
/// Order of the remaining characters is preserved.
#[derive(Clone, Debug, Default)]
pub struct SpecialCharsFilter;

impl SpecialCharsFilter {
    /// Create a new special-characters filter.
    pub fn new() -> Self {
        SpecialCharsFilter
    }
}

impl CharFilter for SpecialCharsFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|c| !is_special_char(*c)).collect()
    }

    fn name(&self) -> &'static str {
        "special_chars"
    }
}
