//! Error types for bytemap
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using MapError
pub type Result<T> = std::result::Result<T, MapError>;

/// Unified error type for bytemap operations
#[derive(Debug, Error)]
pub enum MapError {
    // -------------------------------------------------------------------------
    // Construction Errors
    // -------------------------------------------------------------------------
    #[error("Invalid bucket count: {0} (must be at least 1)")]
    InvalidBucketCount(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Buffer Errors
    // -------------------------------------------------------------------------
    #[error("Allocation failed while reserving {requested} bytes")]
    AllocationFailed { requested: usize },

    #[error("Write of {len} bytes at offset {offset} exceeds buffer length {buffer_len}")]
    OutOfBounds {
        offset: usize,
        len: usize,
        buffer_len: usize,
    },

    // -------------------------------------------------------------------------
    // Map Errors
    // -------------------------------------------------------------------------
    #[error("Key not found")]
    KeyNotFound,

    #[error("Empty keys are reserved for tombstones")]
    EmptyKey,

    #[error("Bucket corruption detected: {0}")]
    Corruption(String),

    // -------------------------------------------------------------------------
    // Shell Errors
    // -------------------------------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
