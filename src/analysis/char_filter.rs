//! Char filter implementations for text cleanup.
//!
//! Char filters transform a text string into a new string, usually by
//! removing a class of characters. They are applied either chained (the
//! output of one feeds the next) or each independently against the original
//! text; both modes are exposed by the analyzer.
//!
//! # Available Filters
//!
//! - [`special_chars::SpecialCharsFilter`] - Removes punctuation and symbol characters
//! - [`digits::DigitFilter`] - Removes ASCII decimal digits
//! - [`spaces::SpaceFilter`] - Removes ASCII space characters

/// Trait for character filters that transform text.
///
/// Implementations produce a new string derived from the input; the input is
/// never mutated. All filters are `Send + Sync` so they can be shared across
/// threads without coordination.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod digits;
pub mod spaces;
pub mod special_chars;
