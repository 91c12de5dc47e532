//! Error types for the Relata library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`RelataError`] enum.
//!
//! # Examples
//!
//! ```
//! use relata::error::{RelataError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RelataError::config("stop_words must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Relata operations.
///
/// Unknown entity ids, rejected relations and queries without any match are
/// not errors; they are handled as sentinels by the graph module.
#[derive(Error, Debug)]
pub enum RelataError {
    /// I/O errors (opening or reading input files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A label or triple record with too few tab-separated fields.
    #[error("Input format error in {source_name} at line {line}: {message}")]
    InputFormat {
        source_name: String,
        line: usize,
        message: String,
    },

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with RelataError.
pub type Result<T> = std::result::Result<T, RelataError>;

impl RelataError {
    /// Create a new input format error for `line` (1-based) of `source_name`.
    pub fn input_format<N: Into<String>, S: Into<String>>(
        source_name: N,
        line: usize,
        message: S,
    ) -> Self {
        RelataError::InputFormat {
            source_name: source_name.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RelataError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RelataError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = RelataError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = RelataError::config("empty stop word list");
        assert_eq!(error.to_string(), "Configuration error: empty stop word list");

        let error = RelataError::input_format("kg.tsv", 3, "expected 3 fields, found 2");
        assert_eq!(
            error.to_string(),
            "Input format error in kg.tsv at line 3: expected 3 fields, found 2"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let relata_error = RelataError::from(io_error);

        match relata_error {
            RelataError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
