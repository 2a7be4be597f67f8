//! Error types for the Textum library.
//!
//! All errors are represented by the [`TextumError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use textum::error::{Result, TextumError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextumError::invalid_argument("target must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Textum operations.
///
/// This enum represents all possible errors that can occur in the Textum
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum TextumError {
    /// I/O errors (reading input files, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (pattern compilation, segmentation, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// An operation received an argument it cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TextumError.
pub type Result<T> = std::result::Result<T, TextumError>;

impl TextumError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextumError::Analysis(msg.into())
    }

    /// Create a new invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextumError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TextumError::Other(msg.into())
    }
}
