//! Replace-on-notify document store.
//!
//! The store holds exactly one [`Snapshot`]. Every change notification carries
//! the complete document tree; the store parses it and swaps the snapshot in a
//! single step. A refresh that fails leaves the previous snapshot in place.

use serde_json::Value as JsonValue;
use tokio::sync::watch;

use crate::error::DocshareResult;
use crate::models::{DocumentRecord, Snapshot};
use crate::tree::parse_document_tree;

pub struct DocumentStore {
    current: watch::Sender<Snapshot>,
}

impl DocumentStore {
    pub fn new() -> Self {
        let (current, _) = watch::channel(Snapshot::default());
        DocumentStore { current }
    }

    /// The current snapshot. Cheap to call; the records are shared.
    pub fn snapshot(&self) -> Snapshot {
        self.current.borrow().clone()
    }

    pub fn revision(&self) -> u64 {
        self.current.borrow().revision()
    }

    /// Receive every snapshot installed after this call.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.current.subscribe()
    }

    /// Install `records` as the new snapshot and return it.
    pub fn replace(&self, records: Vec<DocumentRecord>) -> Snapshot {
        let mut installed = Snapshot::default();
        self.current.send_modify(|snapshot| {
            *snapshot = Snapshot::new(snapshot.revision() + 1, records);
            installed = snapshot.clone();
        });

        tracing::debug!(
            revision = installed.revision(),
            count = installed.len(),
            "Installed document snapshot"
        );

        installed
    }

    /// Parse a full document tree and install it.
    ///
    /// Malformed children are skipped; a payload that is not a tree returns the
    /// error and keeps the current snapshot.
    pub fn apply_tree(&self, tree: &JsonValue) -> DocshareResult<Snapshot> {
        match parse_document_tree(tree) {
            Ok(parsed) => Ok(self.replace(parsed.records)),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    revision = self.revision(),
                    "Rejected document tree, keeping previous snapshot"
                );
                Err(e)
            }
        }
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
