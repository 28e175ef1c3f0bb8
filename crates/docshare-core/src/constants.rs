//! Shared constants.

/// Number of documents shown on the home screen when the search box is empty.
pub const DEFAULT_RECENT_LIMIT: usize = 3;

/// Directory (relative to app storage) that uploaded documents are copied into.
pub const DEFAULT_DOCUMENTS_DIR: &str = "documents";

/// Poll interval for file-backed snapshot sources.
pub const DEFAULT_WATCH_INTERVAL_MS: u64 = 1000;

/// Lower bound accepted for `DOCSHARE_WATCH_INTERVAL_MS`.
pub const MIN_WATCH_INTERVAL_MS: u64 = 50;

/// MIME type handed to the open action when the extension is unknown.
pub const FALLBACK_MIME_TYPE: &str = "*/*";

/// Prefix for uploads whose display name could not be resolved.
pub const UNNAMED_UPLOAD_PREFIX: &str = "unnamed_";

/// Extension given to uploads whose display name could not be resolved.
pub const UNNAMED_UPLOAD_EXTENSION: &str = ".file";

/// Exported document tree read when no path is given on the command line.
pub const ENV_TREE_PATH: &str = "DOCSHARE_TREE_PATH";

pub const ENV_DOCUMENTS_DIR: &str = "DOCSHARE_DOCUMENTS_DIR";

pub const ENV_RECENT_LIMIT: &str = "DOCSHARE_RECENT_LIMIT";

pub const ENV_WATCH_INTERVAL_MS: &str = "DOCSHARE_WATCH_INTERVAL_MS";
