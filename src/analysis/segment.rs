//! Sentence and word segmentation.
//!
//! Both splitters are hand-written scans over the input text. The sentence
//! boundary rule needs one character of look-ahead past a whitespace run,
//! which is easier to express directly than through a pattern.

use crate::analysis::char_filter::digits::DigitFilter;
use crate::analysis::char_filter::special_chars::SpecialCharsFilter;
use crate::analysis::char_filter::CharFilter;

/// Check whether a character is a sentence-terminal mark.
pub fn is_terminal_mark(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Check whether a character can open a new sentence: an uppercase Latin or
/// Cyrillic (`А`-`Я`) letter.
fn opens_sentence(c: char) -> bool {
    c.is_ascii_uppercase() || matches!(c, 'А'..='Я')
}

/// Splits text into sentences.
///
/// A boundary is a terminal mark (`.`, `!`, `?`) followed by a whitespace run
/// and an uppercase Latin or Cyrillic letter. The whitespace run between
/// sentences is consumed; each returned sentence is trimmed and non-empty.
/// A terminal mark at the end of the input closes the last sentence.
#[derive(Clone, Debug, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    /// Create a new sentence splitter.
    pub fn new() -> Self {
        SentenceSplitter
    }

    /// Split the given text into trimmed, non-empty sentences.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut seg_start = 0;

        for (i, c) in text.char_indices() {
            if !is_terminal_mark(c) {
                continue;
            }
            let mark_end = i + c.len_utf8();
            let rest = &text[mark_end..];
            let after_ws = rest.trim_start();
            if after_ws.len() == rest.len() {
                // no whitespace after the mark, not a boundary
                continue;
            }
            if after_ws.chars().next().is_some_and(opens_sentence) {
                let piece = text[seg_start..mark_end].trim();
                if !piece.is_empty() {
                    sentences.push(piece.to_string());
                }
                seg_start = mark_end + (rest.len() - after_ws.len());
            }
        }

        let tail = text[seg_start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }

        sentences
    }

    /// Get the name of this splitter.
    pub fn name(&self) -> &'static str {
        "sentence"
    }
}

/// Splits text into words.
///
/// Digits are removed first, then special characters, then the remainder is
/// split on whitespace runs. Empty tokens are excluded.
#[derive(Clone, Debug, Default)]
pub struct WordSplitter {
    digits: DigitFilter,
    special_chars: SpecialCharsFilter,
}

impl WordSplitter {
    /// Create a new word splitter.
    pub fn new() -> Self {
        WordSplitter {
            digits: DigitFilter::new(),
            special_chars: SpecialCharsFilter::new(),
        }
    }

    /// Split the given text into words.
    pub fn split(&self, text: &str) -> Vec<String> {
        let cleaned = self.special_chars.filter(&self.digits.filter(text));
        cleaned.split_whitespace().map(str::to_string).collect()
    }

    /// Get the name of this splitter.
    pub fn name(&self) -> &'static str {
        "word"
    }
}
