//! Space removal filter.

use super::CharFilter;

/// A char filter that removes the literal ASCII space character (`' '`).
///
/// Tabs, newlines, and other whitespace are kept.
#[derive(Clone, Debug, Default)]
pub struct SpaceFilter;

impl SpaceFilter {
    /// Create a new space filter.
    pub fn new() -> Self {
        SpaceFilter
    }
}

impl CharFilter for SpaceFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|c| *c != ' ').collect()
    }

    fn name(&self) -> &'static str {
        "spaces"
    }
}
