//! Error types for synoverlap.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SynOverlapError`] enum. The enum separates three kinds of failure:
//!
//! - configuration problems detected before any matching work starts
//!   (invalid tuple size, duplicate words in strict synonym mode)
//! - invalid input to the matching core (an empty plagiarized sequence)
//! - resource problems raised while reading and parsing files
//!
//! # Examples
//!
//! ```
//! use synoverlap::error::{Result, SynOverlapError};
//!
//! fn check_tuple_size(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(SynOverlapError::configuration("tuple size must be at least 1"));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(check_tuple_size(0).is_err());
//! assert_eq!(check_tuple_size(3).unwrap(), 3);
//! ```

use std::io;

use thiserror::Error;

/// The main error type for synoverlap operations.
#[derive(Error, Debug)]
pub enum SynOverlapError {
    /// Invalid configuration (tuple size, thread count, strict synonym mode)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input the matching core cannot produce a result for
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Expansion grew past the configured variant cap
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// I/O errors (missing or unreadable files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Parse errors for synonym files and config files
    #[error("Parse error: {0}")]
    Parse(String),

    /// Analysis-related errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failures outside the domain, such as the OS refusing to spawn threads
    #[error("Internal error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SynOverlapError.
pub type Result<T> = std::result::Result<T, SynOverlapError>;

impl SynOverlapError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        SynOverlapError::Configuration(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SynOverlapError::InvalidInput(msg.into())
    }

    /// Create a new resource exhausted error.
    pub fn resource_exhausted<S: Into<String>>(msg: S) -> Self {
        SynOverlapError::ResourceExhausted(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SynOverlapError::Parse(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SynOverlapError::Analysis(msg.into())
    }

    /// Process exit status for this error.
    ///
    /// - `1`: argument, configuration or internal error
    /// - `2`: file access or parse error
    /// - `3`: input the matcher cannot score (e.g. a document shorter than the tuple size)
    pub fn exit_code(&self) -> i32 {
        match self {
            SynOverlapError::Configuration(_) => 1,
            SynOverlapError::Io(_)
            | SynOverlapError::Parse(_)
            | SynOverlapError::Analysis(_)
            | SynOverlapError::Json(_) => 2,
            SynOverlapError::InvalidInput(_) | SynOverlapError::ResourceExhausted(_) => 3,
            SynOverlapError::Anyhow(_) => 1,
        }
    }
}
