//! # Textum
//!
//! A small text analysis library for cleaning, segmenting, counting, and
//! extracting patterns from text.
//!
//! ## Features
//!
//! - Character-level cleanup (special characters, digits, spaces)
//! - Sentence and word segmentation
//! - Character/word/sentence counting
//! - Email and URL extraction
//! - Substring occurrence and sentence-context search
//!
//! The main entry point is [`analysis::analyzer::TextAnalyzer`], which owns
//! an immutable input string and exposes independent query operations over it.

pub mod analysis;
pub mod cli;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
