use std::sync::Arc;

use super::document::DocumentRecord;

/// Immutable view of a user's documents at one point in time.
///
/// Cloning is cheap (the records are shared), so readers take a clone and work
/// on it while the store is free to swap in the next snapshot.
#[derive(Debug, Clone)]
pub struct Snapshot {
    revision: u64,
    records: Arc<[DocumentRecord]>,
}

impl Snapshot {
    pub fn new(revision: u64, records: Vec<DocumentRecord>) -> Self {
        Snapshot {
            revision,
            records: records.into(),
        }
    }

    /// Store revision that produced this snapshot; 0 means nothing has been loaded yet.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Snapshot::new(0, Vec::new())
    }
}
