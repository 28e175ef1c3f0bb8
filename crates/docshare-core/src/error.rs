//! Error types module
//!
//! All fallible core operations return [`DocshareError`]. None of them fail on
//! user input: empty queries, the `All` category and empty snapshots are valid
//! states. Errors only come from the outside world (a missing file, a bad
//! document tree, a broken change feed) and never corrupt the current snapshot.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected conditions like a deleted local file
    Debug,
    /// Warning level - for recoverable issues like a skipped record
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum DocshareError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed record {key}: {reason}")]
    MalformedRecord { key: String, reason: String },

    #[error("Invalid document tree: {0}")]
    InvalidTree(String),

    #[error("Snapshot source error: {0}")]
    Source(String),
}

pub type DocshareResult<T> = Result<T, DocshareError>;

impl DocshareError {
    /// Machine-readable error code (e.g., "MALFORMED_RECORD")
    pub fn error_code(&self) -> &'static str {
        match self {
            DocshareError::NotFound(_) => "NOT_FOUND",
            DocshareError::MalformedRecord { .. } => "MALFORMED_RECORD",
            DocshareError::InvalidTree(_) => "INVALID_TREE",
            DocshareError::Source(_) => "SOURCE_ERROR",
        }
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        match self {
            DocshareError::NotFound(_) => LogLevel::Debug,
            DocshareError::MalformedRecord { .. } | DocshareError::InvalidTree(_) => LogLevel::Warn,
            DocshareError::Source(_) => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DocshareError::NotFound("a.pdf".to_string()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            DocshareError::MalformedRecord {
                key: "-Nx1".to_string(),
                reason: "missing field `fileName`".to_string(),
            }
            .error_code(),
            "MALFORMED_RECORD"
        );
        assert_eq!(
            DocshareError::InvalidTree("expected object".to_string()).error_code(),
            "INVALID_TREE"
        );
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(
            DocshareError::NotFound("x".to_string()).log_level(),
            LogLevel::Debug
        );
        assert_eq!(
            DocshareError::InvalidTree("a number".to_string()).log_level(),
            LogLevel::Warn
        );
        assert_eq!(
            DocshareError::Source("closed".to_string()).log_level(),
            LogLevel::Error
        );
    }

    #[test]
    fn test_display_includes_key() {
        let err = DocshareError::MalformedRecord {
            key: "-Nabc".to_string(),
            reason: "empty fileName".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed record -Nabc: empty fileName");
    }
}
