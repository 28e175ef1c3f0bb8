//! Docshare Core Library
//!
//! This crate provides the document index shared by every docshare component:
//! the record model, extension classification, search/category filtering,
//! recency ranking, storage stats and the replace-on-notify snapshot store.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod home;
pub mod hooks;
pub mod models;
pub mod open;
pub mod query;
pub mod recency;
pub mod source;
pub mod stats;
pub mod store;
pub mod tree;

// Re-export commonly used types
pub use classifier::{classify, mime_type};
pub use config::{env_lookup, Config};
pub use error::{DocshareError, DocshareResult, LogLevel};
pub use home::home_feed;
pub use hooks::{FileProbe, NoOpFileProbe};
pub use models::{DocumentCategory, DocumentRecord, Snapshot};
pub use open::{open_target, OpenTarget};
pub use query::{filter, DocumentQuery, QueryOutcome};
pub use recency::{rank_by_recency, top_n};
pub use source::{run_feed, ChannelSource, FeedSummary, SnapshotSource};
pub use stats::{aggregate, aggregate_with_probe, StorageStats};
pub use store::DocumentStore;
pub use tree::{parse_document_tree, parse_document_tree_str, ParsedTree};
