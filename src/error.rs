//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular
//! crates like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - Parsing is best-effort: a single malformed line never aborts a whole
//!   export unless strict mode is requested

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::record::Transcript;
///
/// fn my_function() -> Result<Transcript> {
///     // ... operations that may fail
///     Ok(Transcript::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The export doesn't match any supported timestamp format.
    ///
    /// Raised once per file when format auto-detection fails over a
    /// non-empty input; never raised for individual lines.
    #[error("Invalid chat export: {message}")]
    InvalidFormat {
        /// Description of what's wrong
        message: String,
    },

    /// A single line failed to parse.
    ///
    /// Only surfaced in strict mode; by default such lines are skipped and
    /// counted on the [`Transcript`](crate::record::Transcript).
    #[error("Line {line}: {message}")]
    Parse {
        /// 1-based line number in the export
        line: usize,
        /// Description of the failure
        message: String,
    },

    /// The filtered vocabulary for a word cloud was empty.
    ///
    /// A recoverable, user-visible condition ("not enough data"), raised by
    /// [`create_wordcloud`](crate::stats::create_wordcloud).
    #[error("Not enough data to build a word cloud for {selection}")]
    EmptyVocabulary {
        /// Label of the selection the word cloud was requested for
        selection: String,
    },

    /// Uploaded bytes are not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::str::Utf8Error,
    },

    /// JSON serialization error.
    ///
    /// This can occur when writing the JSON report.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Creates a line-level parse error.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        ChatlensError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Creates an empty vocabulary error.
    pub fn empty_vocabulary(selection: impl Into<String>) -> Self {
        ChatlensError::EmptyVocabulary {
            selection: selection.into(),
        }
    }

    /// Creates a UTF-8 error with context.
    pub fn utf8(context: impl Into<String>, source: std::str::Utf8Error) -> Self {
        ChatlensError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a line-level parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatlensError::Parse { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is an empty vocabulary error.
    pub fn is_empty_vocabulary(&self) -> bool {
        matches!(self, ChatlensError::EmptyVocabulary { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
