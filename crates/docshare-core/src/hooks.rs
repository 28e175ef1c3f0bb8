//! Hooks for local device storage
//!
//! The core never touches the filesystem itself. Stats and the open hand-off
//! ask a [`FileProbe`], which the storage crate implements for the local disk
//! and tests replace with fakes.

/// Existence and size checks for a record's `localPath`.
///
/// Implementations must be tolerant: a path that cannot be inspected reports
/// `false` / `0` rather than failing.
pub trait FileProbe: Send + Sync {
    /// True if `path` resolves to an existing regular file.
    fn exists(&self, path: &str) -> bool;

    /// Size of the file at `path` in bytes, or 0 if it cannot be read.
    fn size(&self, path: &str) -> u64;
}

/// Probe that reports every file as missing.
pub struct NoOpFileProbe;

impl FileProbe for NoOpFileProbe {
    fn exists(&self, _path: &str) -> bool {
        false
    }

    fn size(&self, _path: &str) -> u64 {
        0
    }
}
