//! Digit removal filter.

use super::CharFilter;

/// A char filter that removes ASCII decimal digits (`0`-`9`).
///
/// Non-ASCII digits (e.g. Arabic-Indic or fullwidth digits) are kept.
#[derive(Clone, Debug, Default)]
pub struct DigitFilter;

impl DigitFilter {
    /// Create a new digit filter.
    pub fn new() -> Self {
        DigitFilter
    }
}

impl CharFilter for DigitFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|c| !c.is_ascii_digit()).collect()
    }

    fn name(&self) -> &'static str {
        "digits"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_ascii_digits() {
        let filter = DigitFilter::new();
        assert_eq!(filter.filter("a1b2c3"), "abc");
        assert_eq!(filter.filter("0123456789"), "");
    }

    #[test]
    fn test_keeps_non_ascii_digits() {
        let filter = DigitFilter::new();
        // Arabic-Indic and fullwidth digits are not in the 0-9 set
        assert_eq!(filter.filter("٣ and １"), "٣ and １");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(DigitFilter::new().name(), "digits");
    }
}
