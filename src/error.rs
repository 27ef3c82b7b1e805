//! Error types for lanshelf
//!
//! Defines module-specific error types using thiserror for clear error
//! propagation. All errors are converted to HTTP responses at the handler
//! boundary; none are fatal to the running process.

use thiserror::Error;

/// Main error type for lanshelf
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration / startup errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors (unreadable directory, failed read)
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested file does not exist or resolves outside the media root
    #[error("Not found: {0}")]
    NotFound(String),

    /// Requested byte range starts at or beyond end of file
    #[error("Range not satisfiable: {start} >= {size}")]
    RangeNotSatisfiable { start: u64, size: u64 },

    /// Missing or invalid request fields
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Playback record unreadable or unwritable
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Convenience Result type using lanshelf Error
pub type Result<T> = std::result::Result<T, Error>;
