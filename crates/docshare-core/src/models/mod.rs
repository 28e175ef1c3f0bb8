//! Data models for the document index
//!
//! Records are immutable; a refresh replaces the whole [`Snapshot`] instead of
//! editing records in place.

mod category;
mod document;
mod snapshot;

pub use category::*;
pub use document::*;
pub use snapshot::*;
