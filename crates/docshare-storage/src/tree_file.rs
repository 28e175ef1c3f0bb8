//! Exported document trees on local disk.
//!
//! A tree file holds the JSON stored under one user's documents node, as
//! produced by the realtime store's export. [`JsonFileSource`] polls such a
//! file and emits the full tree whenever its contents change.

use async_trait::async_trait;
use docshare_core::{DocshareError, DocshareResult, SnapshotSource};
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Read and decode a tree file once.
pub async fn read_tree_file(path: &Path) -> DocshareResult<JsonValue> {
    let contents = read_contents(path).await?;
    decode(path, &contents)
}

async fn read_contents(path: &Path) -> DocshareResult<String> {
    fs::read_to_string(path).await.map_err(|e| {
        DocshareError::Source(format!("Failed to read tree file {}: {}", path.display(), e))
    })
}

fn decode(path: &Path, contents: &str) -> DocshareResult<JsonValue> {
    serde_json::from_str(contents).map_err(|e| {
        DocshareError::InvalidTree(format!("{} is not valid JSON: {}", path.display(), e))
    })
}

/// Change feed backed by a tree file that is re-read every `poll_interval`.
pub struct JsonFileSource {
    path: PathBuf,
    ticker: Interval,
    last_contents: Option<String>,
    last_failure: Option<String>,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>, poll_interval: Duration) -> Self {
        let mut ticker = interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        JsonFileSource {
            path: path.into(),
            ticker,
            last_contents: None,
            last_failure: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotSource for JsonFileSource {
    /// Waits until the file's contents differ from the last emitted tree.
    ///
    /// A failure is reported once; the same failure on later polls is only
    /// logged at debug level until something changes.
    async fn next_event(&mut self) -> Option<DocshareResult<JsonValue>> {
        loop {
            self.ticker.tick().await;

            let contents = match read_contents(&self.path).await {
                Ok(contents) => contents,
                Err(e) => {
                    let message = e.to_string();
                    if self.last_failure.as_deref() == Some(message.as_str()) {
                        tracing::debug!(path = %self.path.display(), "Tree file still unreadable");
                        continue;
                    }
                    self.last_failure = Some(message);
                    return Some(Err(e));
                }
            };

            if self.last_contents.as_deref() == Some(contents.as_str()) {
                continue;
            }

            let decoded = decode(&self.path, &contents);
            self.last_contents = Some(contents);
            match decoded {
                Ok(tree) => {
                    self.last_failure = None;
                    return Some(Ok(tree));
                }
                Err(e) => {
                    self.last_failure = Some(e.to_string());
                    return Some(Err(e));
                }
            }
        }
    }
}
