//! The text analyzer facade.
//!
//! [`TextAnalyzer`] owns an immutable input string and exposes independent
//! query and transformation operations over it. Every operation is a pure
//! function of the text plus its own arguments and is recomputed per call;
//! there is no caching and no mutable state, so instances can be shared
//! across threads freely.
//!
//! # Examples
//!
//! ```
//! use textum::analysis::analyzer::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new("Hello world. How are you?");
//! assert_eq!(analyzer.count_sentences(), 2);
//! assert_eq!(analyzer.count_words(), 5);
//! ```

use std::collections::HashSet;

use crate::analysis::char_filter::digits::DigitFilter;
use crate::analysis::char_filter::spaces::SpaceFilter;
use crate::analysis::char_filter::special_chars::SpecialCharsFilter;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::extract;
use crate::analysis::occurrence;
use crate::analysis::segment::{SentenceSplitter, WordSplitter};
use crate::error::Result;

/// Analyzes a single immutable text.
///
/// The text is owned by the analyzer and never mutates; all operations
/// return newly derived values.
#[derive(Clone, Debug)]
pub struct TextAnalyzer {
    text: String,
    special_chars: SpecialCharsFilter,
    digits: DigitFilter,
    spaces: SpaceFilter,
    sentences: SentenceSplitter,
    words: WordSplitter,
}

impl TextAnalyzer {
    /// Create a new analyzer over the given text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        TextAnalyzer {
            text: text.into(),
            special_chars: SpecialCharsFilter::new(),
            digits: DigitFilter::new(),
            spaces: SpaceFilter::new(),
            sentences: SentenceSplitter::new(),
            words: WordSplitter::new(),
        }
    }

    /// Get the original input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Return the text with special characters removed.
    pub fn clean_text(&self) -> String {
        self.special_chars.filter(&self.text)
    }

    /// Return the text with literal ASCII spaces removed.
    ///
    /// Tabs and newlines are kept.
    pub fn remove_spaces(&self) -> String {
        self.spaces.filter(&self.text)
    }

    /// Return the text with ASCII digits removed.
    pub fn remove_numbers(&self) -> String {
        self.digits.filter(&self.text)
    }

    /// Return the text with special characters, then digits, then spaces
    /// removed, chained in that order.
    pub fn all_transforms(&self) -> String {
        self.spaces
            .filter(&self.digits.filter(&self.special_chars.filter(&self.text)))
    }

    /// Split the text into trimmed, non-empty sentences.
    pub fn split_sentences(&self) -> Vec<String> {
        self.sentences.split(&self.text)
    }

    /// Split the text into words.
    pub fn split_words(&self) -> Vec<String> {
        self.words.split(&self.text)
    }

    /// Count characters: `(length after all transforms, length of the
    /// original text)`, both in characters.
    pub fn count_chars(&self) -> (usize, usize) {
        (
            self.all_transforms().chars().count(),
            self.text.chars().count(),
        )
    }

    /// Count characters under each transform applied independently to the
    /// original text: `(length after special-char removal, length after
    /// digit removal, length after space removal)`.
    ///
    /// Unlike [`all_transforms`](Self::all_transforms), the transforms are
    /// not chained here.
    pub fn aux_count_chars(&self) -> (usize, usize, usize) {
        (
            self.clean_text().chars().count(),
            self.remove_numbers().chars().count(),
            self.remove_spaces().chars().count(),
        )
    }

    /// Count the words in the text.
    pub fn count_words(&self) -> usize {
        self.split_words().len()
    }

    /// Count the sentences in the text.
    pub fn count_sentences(&self) -> usize {
        self.split_sentences().len()
    }

    /// Extract the set of unique email-like substrings.
    pub fn extract_emails(&self) -> HashSet<String> {
        extract::extract_emails(&self.text)
    }

    /// Extract the set of unique URL-like substrings.
    pub fn extract_urls(&self) -> HashSet<String> {
        extract::extract_urls(&self.text)
    }

    /// Extract every sentence-bounded run of text containing `target`.
    ///
    /// `target` is matched literally. An empty target is an invalid-argument
    /// error.
    pub fn extract_context(&self, target: &str) -> Result<Vec<String>> {
        extract::extract_context(&self.text, target)
    }

    /// Find every occurrence of `target`, overlapping matches included.
    ///
    /// Returns the occurrence count and the zero-based character offset of
    /// each occurrence. An empty target is an invalid-argument error.
    pub fn sentence_index_range(&self, target: &str) -> Result<(usize, Vec<usize>)> {
        occurrence::find_occurrences(&self.text, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        let analyzer = TextAnalyzer::new("Hello, world! (42)");
        assert_eq!(analyzer.clean_text(), "Hello world 42");
    }

    #[test]
    fn test_remove_spaces_keeps_other_whitespace() {
        let analyzer = TextAnalyzer::new("a b\tc\nd");
        assert_eq!(analyzer.remove_spaces(), "ab\tc\nd");
    }

    #[test]
    fn test_remove_numbers() {
        let analyzer = TextAnalyzer::new("a1b2c3");
        assert_eq!(analyzer.remove_numbers(), "abc");
    }

    #[test]
    fn test_all_transforms_chained_order() {
        let analyzer = TextAnalyzer::new("Hi, room 42!");
        assert_eq!(analyzer.all_transforms(), "Hiroom");
    }

    #[test]
    fn test_count_chars_matches_transforms() {
        let analyzer = TextAnalyzer::new("Hi, room 42!");
        let (transformed, original) = analyzer.count_chars();
        assert_eq!(transformed, analyzer.all_transforms().chars().count());
        assert_eq!(original, "Hi, room 42!".chars().count());
    }

    #[test]
    fn test_aux_count_chars_independent_transforms() {
        let analyzer = TextAnalyzer::new("a, 1 b");
        // clean: "a 1 b" (5), no digits: "a,  b" (5), no spaces: "a,1b" (4)
        assert_eq!(analyzer.aux_count_chars(), (5, 5, 4));
    }

    #[test]
    fn test_counts() {
        let analyzer = TextAnalyzer::new("Hello world. How are you?");
        assert_eq!(analyzer.count_words(), 5);
        assert_eq!(analyzer.count_sentences(), 2);
    }

    #[test]
    fn test_empty_text_all_operations() {
        let analyzer = TextAnalyzer::new("");
        assert_eq!(analyzer.clean_text(), "");
        assert_eq!(analyzer.remove_spaces(), "");
        assert_eq!(analyzer.remove_numbers(), "");
        assert_eq!(analyzer.all_transforms(), "");
        assert!(analyzer.split_sentences().is_empty());
        assert!(analyzer.split_words().is_empty());
        assert_eq!(analyzer.count_chars(), (0, 0));
        assert_eq!(analyzer.aux_count_chars(), (0, 0, 0));
        assert_eq!(analyzer.count_words(), 0);
        assert_eq!(analyzer.count_sentences(), 0);
        assert!(analyzer.extract_emails().is_empty());
        assert!(analyzer.extract_urls().is_empty());
        assert_eq!(analyzer.sentence_index_range("a").unwrap(), (0, vec![]));
        assert!(analyzer.extract_context("a").unwrap().is_empty());
    }

    #[test]
    fn test_text_never_mutates() {
        let analyzer = TextAnalyzer::new("Keep me, intact 1!");
        let _ = analyzer.all_transforms();
        let _ = analyzer.split_words();
        assert_eq!(analyzer.text(), "Keep me, intact 1!");
    }
}
