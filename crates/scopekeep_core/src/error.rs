//! # Buffer Error Types
//!
//! All errors that can occur when accessing or allocating an owning buffer.

use thiserror::Error;

/// Errors that can occur in buffer operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Element access outside `[0, len)`.
    ///
    /// An empty buffer reports this for every index.
    #[error("index out of range: index {index}, len {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The buffer length at the time of the access.
        len: usize,
    },

    /// Storage for the requested element count could not be obtained.
    #[error("allocation failed: {count} elements ({bytes} bytes)")]
    AllocationFailed {
        /// Number of elements requested.
        count: usize,
        /// Requested size in bytes, saturated at `usize::MAX`.
        bytes: usize,
    },
}

/// Result type for buffer operations.
pub type BufferResult<T> = Result<T, BufferError>;
