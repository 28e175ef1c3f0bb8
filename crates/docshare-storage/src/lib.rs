//! Docshare Storage Library
//!
//! Local-device implementations of the core's storage seams:
//!
//! - [`LocalFileProbe`] answers existence and size checks for record paths.
//! - [`JsonFileSource`] turns an exported document tree file into a change
//!   feed by re-reading it on an interval.
//!
//! Relative record paths are resolved against the probe's documents directory;
//! absolute paths are used as-is.

pub mod local;
pub mod traits;
pub mod tree_file;

// Re-export commonly used types
pub use docshare_core::FileProbe;
pub use local::LocalFileProbe;
pub use traits::{ProbeError, ProbeResult};
pub use tree_file::{read_tree_file, JsonFileSource};
