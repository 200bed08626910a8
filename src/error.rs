//! Unified error types for chatscope.
//!
//! This module provides a single [`ChatscopeError`] enum that covers every
//! terminal failure of the library, and [`ParseWarning`] for the recoverable
//! conditions the pipeline works around.
//!
//! # Error Handling Philosophy
//!
//! - **Fatal** conditions (nothing could be extracted, no date could be parsed,
//!   too few records survived) abort the parse and carry a human-readable
//!   diagnostic. The caller never receives a partial dataset.
//! - **Recoverable** conditions (unknown format, per-row date fallback) are
//!   handled in place and reported as [`ParseWarning`]s on the result.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parsing::Stage;

/// A specialized [`Result`] type for chatscope operations.
///
/// # Example
///
/// ```rust
/// use chatscope::error::Result;
/// use chatscope::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatscopeError>;

/// The error type for all chatscope operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatscopeError {
    /// An I/O error occurred while reading a transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Neither the detected grammar nor the generic fallback found any message.
    #[error("No messages could be extracted{}. The chat format may not be supported.", from_path(.path))]
    ExtractionFailure {
        /// The transcript path, if the text came from a file
        path: Option<PathBuf>,
    },

    /// No date template, including the flexible fallback, parsed any row.
    #[error("Failed to parse message dates ({attempted} timestamps tried). Chat format may not be supported.")]
    DateParseFailure {
        /// Number of timestamp fragments that were attempted
        attempted: usize,
    },

    /// Fewer valid records than the configured minimum survived validation.
    #[error("Too few valid messages found after processing: {found} (need at least {required}). Please check the chat file format.")]
    InsufficientData {
        /// Records that survived validation
        found: usize,
        /// Minimum required by the configuration
        required: usize,
    },

    /// Output format or extension is not usable.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Parser configuration is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error while converting output buffers.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

fn from_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" from {}", p.display()))
        .unwrap_or_default()
}

impl From<std::string::FromUtf8Error> for ChatscopeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatscopeError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatscopeError {
    /// Creates an extraction failure without a file path.
    pub fn extraction_failure() -> Self {
        ChatscopeError::ExtractionFailure { path: None }
    }

    /// Creates a date parse failure.
    pub fn date_parse_failure(attempted: usize) -> Self {
        ChatscopeError::DateParseFailure { attempted }
    }

    /// Creates an insufficient data error.
    pub fn insufficient_data(found: usize, required: usize) -> Self {
        ChatscopeError::InsufficientData { found, required }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatscopeError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChatscopeError::InvalidConfig(message.into())
    }

    /// Attaches the transcript path to an extraction failure.
    #[must_use]
    pub fn with_path(self, new_path: impl Into<PathBuf>) -> Self {
        match self {
            ChatscopeError::ExtractionFailure { .. } => ChatscopeError::ExtractionFailure {
                path: Some(new_path.into()),
            },
            other => other,
        }
    }

    /// Returns the pipeline stage that failed, for pipeline errors.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            ChatscopeError::ExtractionFailure { .. } => Some(Stage::Split),
            ChatscopeError::DateParseFailure { .. } => Some(Stage::DatesParsed),
            ChatscopeError::InsufficientData { .. } => Some(Stage::Validated),
            _ => None,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatscopeError::Io(_))
    }

    /// Returns `true` if no messages could be extracted.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(self, ChatscopeError::ExtractionFailure { .. })
    }

    /// Returns `true` if no dates could be parsed.
    pub fn is_date_parse_failure(&self) -> bool {
        matches!(self, ChatscopeError::DateParseFailure { .. })
    }

    /// Returns `true` if too few records survived validation.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, ChatscopeError::InsufficientData { .. })
    }
}

/// A recoverable condition the pipeline worked around.
///
/// Warnings never abort a parse; they are attached to the
/// [`ParsedChat`](crate::ParsedChat) so the caller can surface them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ParseWarning {
    /// No catalog grammar matched the sample; the fallback grammar was used.
    UnrecognizedFormat {
        /// Name of the grammar used instead
        fallback: String,
    },
    /// Messages were recovered by the permissive catch-all pattern.
    GenericExtraction {
        /// Number of candidate messages found
        extracted: usize,
    },
    /// No single template parsed every timestamp; rows were parsed one by one.
    FlexibleDates {
        /// Rows whose timestamp could not be parsed and were dropped
        dropped: usize,
    },
    /// Rows removed during validation because their body was empty.
    DroppedRecords {
        /// Number of rows removed
        dropped: usize,
    },
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseWarning::UnrecognizedFormat { fallback } => write!(
                f,
                "Chat format not automatically recognized; attempting to process with '{fallback}'"
            ),
            ParseWarning::GenericExtraction { extracted } => write!(
                f,
                "Detected grammar matched nothing; generic pattern recovered {extracted} messages"
            ),
            ParseWarning::FlexibleDates { dropped: 0 } => f.write_str(
                "No single date template fit every message; timestamps parsed row by row"
            ),
            ParseWarning::FlexibleDates { dropped } => write!(
                f,
                "No single date template fit every message; {dropped} unparseable timestamps dropped"
            ),
            ParseWarning::DroppedRecords { dropped } => {
                write!(f, "{dropped} messages with empty text dropped")
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
