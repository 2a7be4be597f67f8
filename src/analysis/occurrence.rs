//! Overlap-permitting substring occurrence scan.

use crate::error::{Result, TextumError};

/// Find every occurrence of `target` in `text`.
///
/// Returns the occurrence count and the zero-based character offset of each
/// occurrence, in order. After a match the scan resumes one character past
/// the match start, so overlapping occurrences are all counted: searching
/// `"aXaXa"` for `"aXa"` yields `(2, [0, 2])`.
///
/// An empty target is rejected as an invalid argument.
pub fn find_occurrences(text: &str, target: &str) -> Result<(usize, Vec<usize>)> {
    if target.is_empty() {
        return Err(TextumError::invalid_argument(
            "search target must not be empty",
        ));
    }

    let mut offsets = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;

    while let Some(found) = text[byte_pos..].find(target) {
        let match_start = byte_pos + found;
        let match_char = char_pos + text[byte_pos..match_start].chars().count();
        offsets.push(match_char);

        // resume one character past the match start
        match text[match_start..].chars().next() {
            Some(c) => {
                byte_pos = match_start + c.len_utf8();
                char_pos = match_char + 1;
            }
            None => break,
        }
    }

    Ok((offsets.len(), offsets))
}
