//! Pattern-based extraction: emails, URLs, and sentence-level context.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, TextumError};

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("email pattern should be valid");
    static ref URL_PATTERN: Regex = Regex::new(
        r"https?://(?:[-\w.]|%[\da-fA-F]{2})+[/\w.\-]*\??[/\w.\-=&%]*|www\.[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}[/\w.\-]*\??[/\w.\-=&%]*"
    )
    .expect("url pattern should be valid");
}

/// Extract the set of unique email-like substrings from the text.
///
/// Matching is case-sensitive; duplicates collapse through set semantics, so
/// iteration order is not guaranteed.
pub fn extract_emails(text: &str) -> HashSet<String> {
    EMAIL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract the set of unique URL-like substrings from the text.
///
/// Matches `http://`/`https://` URLs (percent-encoded octets allowed in the
/// authority) and bare `www.` domains.
pub fn extract_urls(text: &str) -> HashSet<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract every minimal run of non-terminal characters that contains
/// `target` and ends at a sentence-terminal mark.
///
/// `target` is matched literally: regex metacharacters in it are escaped
/// before the pattern is built. An empty target is rejected.
pub fn extract_context(text: &str, target: &str) -> Result<Vec<String>> {
    if target.is_empty() {
        return Err(TextumError::invalid_argument(
            "context target must not be empty",
        ));
    }

    let pattern = format!(r"[^.!?]*{}[^.!?]*[.!?]", regex::escape(target));
    let context = Regex::new(&pattern)
        .map_err(|e| TextumError::analysis(format!("invalid context pattern: {e}")))?;

    Ok(context
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_emails() {
        let emails = extract_emails("Contact me at a@b.com or admin@example.org today");
        assert_eq!(emails.len(), 2);
        assert!(emails.contains("a@b.com"));
        assert!(emails.contains("admin@example.org"));
    }

    #[test]
    fn test_extract_emails_deduplicates() {
        let emails = extract_emails("a@b.com and again a@b.com");
        assert_eq!(emails.len(), 1);
    }

    #[test]
    fn test_extract_emails_none() {
        assert!(extract_emails("no addresses here").is_empty());
        assert!(extract_emails("").is_empty());
    }

    #[test]
    fn test_extract_urls() {
        let urls = extract_urls("see https://example.com/page and www.rust-lang.org for more");
        assert_eq!(urls.len(), 2);
        assert!(urls.contains("https://example.com/page"));
        assert!(urls.contains("www.rust-lang.org"));
    }

    #[test]
    fn test_extract_urls_percent_encoding() {
        let urls = extract_urls("download http://host.example/a%20b now");
        assert!(urls.contains("http://host.example/a%20b"));
    }

    #[test]
    fn test_extract_context() {
        let contexts = extract_context("Bad. Has target here. Also fine.", "target").unwrap();
        assert_eq!(contexts, vec![" Has target here."]);
    }

    #[test]
    fn test_extract_context_escapes_metacharacters() {
        let contexts = extract_context("Costs (a lot). Costs nothing.", "(a lot)").unwrap();
        assert_eq!(contexts, vec!["Costs (a lot)."]);
    }

    #[test]
    fn test_extract_context_no_match() {
        let contexts = extract_context("Nothing relevant here.", "missing").unwrap();
        assert!(contexts.is_empty());
    }

    #[test]
    fn test_extract_context_empty_target() {
        assert!(extract_context("some text.", "").is_err());
    }
}
