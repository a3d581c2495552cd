//! # Guard Error Types
//!
//! All errors that can occur while acquiring or using a guarded resource.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the guards crate.
#[derive(Error, Debug)]
pub enum GuardError {
    /// The file could not be opened.
    #[error("cannot open file {}: {source}", path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Reading from an open file failed.
    #[error("cannot read file {}: {source}", path.display())]
    Read {
        /// Path of the open file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file exceeds the configured read limit.
    #[error("file {} is {size} bytes, limit is {limit}", path.display())]
    TooLarge {
        /// Path of the open file.
        path: PathBuf,
        /// Bytes seen: the metadata length, or `limit + 1` when the excess
        /// was found while reading.
        size: u64,
        /// Configured `max_read_bytes`.
        limit: u64,
    },

    /// File contents are not valid UTF-8.
    #[error("file {} is not valid UTF-8: {source}", path.display())]
    Utf8 {
        /// Path of the open file.
        path: PathBuf,
        /// Decoding error.
        source: std::string::FromUtf8Error,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for guard operations.
pub type GuardResult<T> = Result<T, GuardError>;
