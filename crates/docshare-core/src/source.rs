//! Change feed abstraction.
//!
//! The remote store pushes the complete document tree whenever anything under
//! the user's node changes. A [`SnapshotSource`] yields those trees in order;
//! [`run_feed`] installs each one into a [`DocumentStore`].

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tokio::sync::mpsc;

use crate::error::{DocshareError, DocshareResult};
use crate::store::DocumentStore;

/// A stream of full document trees.
#[async_trait]
pub trait SnapshotSource: Send {
    /// Wait for the next tree. `None` means the feed has ended.
    async fn next_event(&mut self) -> Option<DocshareResult<JsonValue>>;
}

/// Source fed from a channel, for pushing trees from listener callbacks.
pub struct ChannelSource {
    rx: mpsc::Receiver<DocshareResult<JsonValue>>,
}

impl ChannelSource {
    /// Create a source and the sender that feeds it.
    pub fn new(buffer: usize) -> (mpsc::Sender<DocshareResult<JsonValue>>, Self) {
        let (tx, rx) = mpsc::channel(buffer);
        (tx, ChannelSource { rx })
    }
}

#[async_trait]
impl SnapshotSource for ChannelSource {
    async fn next_event(&mut self) -> Option<DocshareResult<JsonValue>> {
        self.rx.recv().await
    }
}

/// Counts of what [`run_feed`] did before the source ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedSummary {
    pub applied: u64,
    pub rejected: u64,
}

/// Install every tree from `source` into `store` until the source ends.
///
/// Source errors and unparseable trees are logged and counted; the store keeps
/// its previous snapshot and the loop carries on with the next event.
pub async fn run_feed<S>(source: &mut S, store: &DocumentStore) -> FeedSummary
where
    S: SnapshotSource + ?Sized,
{
    let mut summary = FeedSummary::default();

    while let Some(event) = source.next_event().await {
        let outcome = event.and_then(|tree| store.apply_tree(&tree));
        match outcome {
            Ok(snapshot) => {
                summary.applied += 1;
                tracing::info!(
                    revision = snapshot.revision(),
                    count = snapshot.len(),
                    "Document snapshot refreshed"
                );
            }
            Err(e) => {
                summary.rejected += 1;
                log_rejected(&e);
            }
        }
    }

    tracing::info!(
        applied = summary.applied,
        rejected = summary.rejected,
        "Snapshot feed ended"
    );
    summary
}

fn log_rejected(e: &DocshareError) {
    match e.log_level() {
        crate::error::LogLevel::Debug => {
            tracing::debug!(error = %e, code = e.error_code(), "Snapshot refresh failed")
        }
        crate::error::LogLevel::Warn => {
            tracing::warn!(error = %e, code = e.error_code(), "Snapshot refresh failed")
        }
        crate::error::LogLevel::Error => {
            tracing::error!(error = %e, code = e.error_code(), "Snapshot refresh failed")
        }
    }
}
