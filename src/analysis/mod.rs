//! Text analysis module for Textum.
//!
//! This module provides the core text analysis functionality: character
//! filters for cleanup, sentence/word segmentation, pattern-based extraction,
//! and the [`analyzer::TextAnalyzer`] facade that ties them together.

pub mod analyzer;
pub mod char_filter;
pub mod extract;
pub mod occurrence;
pub mod segment;

// Re-export commonly used types
pub use analyzer::*;
pub use char_filter::*;
pub use extract::*;
pub use occurrence::*;
pub use segment::*;
