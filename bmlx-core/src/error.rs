//! Error types for bmlx operations.
//!
//! One structured error type covers the whole decode path: I/O failures
//! from the underlying stream, container validation errors, and
//! decompression errors. A container whose magic does not match the
//! bitmap-list signature is deliberately *not* an error; it parses as an
//! empty entry set.

use std::io;
use thiserror::Error;

/// The main error type for bmlx operations.
#[derive(Debug, Error)]
pub enum BmlError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Container version byte does not match the supported version.
    #[error("Unsupported container version: {version}")]
    UnsupportedVersion {
        /// The version byte found in the file.
        version: u8,
    },

    /// Entry type tag is neither raw nor compressed.
    #[error("Unknown entry type {type_tag} at entry {index}")]
    UnknownEntryType {
        /// The type tag byte found at the entry offset.
        type_tag: u8,
        /// Index of the entry in the offset table.
        index: usize,
    },

    /// The stream ended before a field or copy could be satisfied.
    #[error("Unexpected end of stream: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// Back-reference into window bytes that were never written.
    #[error("Invalid back-reference distance: {distance} exceeds history size {history_size}")]
    InvalidDistance {
        /// The invalid distance value.
        distance: usize,
        /// Number of bytes currently in the history window.
        history_size: usize,
    },

    /// Token stream consumed more input than the entry header declared.
    #[error("Compressed stream overran its declared size: consumed {consumed} of {limit} bytes")]
    CompressedOverrun {
        /// Compressed bytes consumed so far, including the overrunning read.
        consumed: u64,
        /// Declared compressed size from the entry header.
        limit: u64,
    },
}

/// Result type alias for bmlx operations.
pub type Result<T> = std::result::Result<T, BmlError>;

impl BmlError {
    /// Create an unsupported version error.
    pub fn unsupported_version(version: u8) -> Self {
        Self::UnsupportedVersion { version }
    }

    /// Create an unknown entry type error.
    pub fn unknown_entry_type(type_tag: u8, index: usize) -> Self {
        Self::UnknownEntryType { type_tag, index }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create an invalid distance error.
    pub fn invalid_distance(distance: usize, history_size: usize) -> Self {
        Self::InvalidDistance {
            distance,
            history_size,
        }
    }

    /// Create a compressed overrun error.
    pub fn compressed_overrun(consumed: u64, limit: u64) -> Self {
        Self::CompressedOverrun { consumed, limit }
    }
}
