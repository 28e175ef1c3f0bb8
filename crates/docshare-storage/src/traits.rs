//! Storage error types
//!
//! [`ProbeError`] is what the fallible inspection methods on
//! [`crate::LocalFileProbe`] return. The [`docshare_core::FileProbe`] impl
//! folds these into `false` / `0`.

use thiserror::Error;

/// File inspection errors
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Not a regular file: {0}")]
    NotAFile(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;
