//! Unified error types for chatsplit.
//!
//! This module provides a single [`ChatsplitError`] enum covering every
//! fatal failure in the library: unreadable input, unwritable output, and
//! malformed interchange files.
//!
//! # What is *not* an error
//!
//! Chunks that fail field extraction (no datetime separator, the encryption
//! notice, no author separator) are expected in real transcripts. They are
//! reported as [`SkipReason`](crate::parsing::SkipReason) values and never
//! abort a run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatsplit operations.
///
/// # Example
///
/// ```rust
/// use chatsplit::error::Result;
/// use chatsplit::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsplitError>;

/// The error type for all chatsplit operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsplitError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The output destination cannot be created or written
    #[error("IO error{}: {source}", path.as_ref().map(|p| format!(" ({})", p.display())).unwrap_or_default())]
    Io {
        /// The underlying I/O error
        #[source]
        source: io::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The input is not valid UTF-8 text.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// JSON parsing/serialization error.
    ///
    /// Raised when a previously exported file is not valid JSON, or when one
    /// of its entries is missing a string-valued field.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The content doesn't match the expected structure.
    ///
    /// This occurs when:
    /// - An interchange file's top level is not an array
    /// - An output path has an unknown extension
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<io::Error> for ChatsplitError {
    fn from(source: io::Error) -> Self {
        ChatsplitError::Io { source, path: None }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatsplitError {
    /// Creates an I/O error that remembers which file was involved.
    pub fn io_at(source: io::Error, path: impl Into<PathBuf>) -> Self {
        ChatsplitError::Io {
            source,
            path: Some(path.into()),
        }
    }

    /// Creates a UTF-8 error for the given file.
    pub fn utf8_in(source: std::string::FromUtf8Error, path: impl Into<PathBuf>) -> Self {
        ChatsplitError::Utf8 {
            context: path.into().display().to_string(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatsplitError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsplitError::Io { .. })
    }

    /// Returns `true` if this is a UTF-8 error.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatsplitError::Utf8 { .. })
    }

    /// Returns `true` if this is a JSON error.
    pub fn is_json(&self) -> bool {
        matches!(self, ChatsplitError::Json(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatsplitError::InvalidFormat { .. })
    }

    /// Returns the file path associated with this error, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ChatsplitError::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}
