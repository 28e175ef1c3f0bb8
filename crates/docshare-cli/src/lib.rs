pub mod render;

use anyhow::Context;
use docshare_core::constants::{ENV_RECENT_LIMIT, ENV_WATCH_INTERVAL_MS};
use docshare_core::{
    aggregate_with_probe, open_target, rank_by_recency, top_n, Config, DocumentRecord,
    DocumentStore, FileProbe, OpenTarget, Snapshot, StorageStats,
};
use docshare_storage::{read_tree_file, LocalFileProbe};
use std::path::{Path, PathBuf};
use tokio::sync::watch;

/// Output format for every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Read an exported tree file and install it into a fresh store.
pub async fn load_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let tree = read_tree_file(path)
        .await
        .with_context(|| format!("Failed to load document tree from {}", path.display()))?;

    let store = DocumentStore::new();
    let snapshot = store
        .apply_tree(&tree)
        .with_context(|| format!("{} does not contain a document tree", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        count = snapshot.len(),
        "Loaded document snapshot"
    );
    Ok(snapshot)
}

/// Settings given on the command line. Each one shadows its environment variable.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub tree: Option<PathBuf>,
    pub documents_dir: Option<PathBuf>,
    pub watch_interval_ms: Option<u64>,
}

/// Optional settings the running subcommand actually reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigUsage {
    pub recent_limit: bool,
    pub watch_interval: bool,
}

/// Merge environment and command-line settings, then validate once.
///
/// Variables the subcommand does not read are ignored, so a bad
/// `DOCSHARE_RECENT_LIMIT` cannot break `stats`.
pub fn resolve_config<F>(
    overrides: &ConfigOverrides,
    usage: ConfigUsage,
    lookup: F,
) -> anyhow::Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::from_vars(|key| match key {
        ENV_RECENT_LIMIT if !usage.recent_limit => None,
        ENV_WATCH_INTERVAL_MS
            if !usage.watch_interval || overrides.watch_interval_ms.is_some() =>
        {
            None
        }
        _ => lookup(key),
    })
    .context("Failed to load configuration")?;

    if let Some(tree) = &overrides.tree {
        config.tree_path = Some(tree.clone());
    }
    if let Some(dir) = &overrides.documents_dir {
        config.documents_dir = dir.clone();
    }
    if let Some(ms) = overrides.watch_interval_ms {
        config.watch_interval_ms = ms;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Newest records first; `limit` falls back to `default_limit` and may be negative.
pub fn recent_documents(
    records: &[DocumentRecord],
    limit: Option<i64>,
    default_limit: usize,
) -> Vec<&DocumentRecord> {
    let limit = limit.unwrap_or_else(|| i64::try_from(default_limit).unwrap_or(i64::MAX));
    top_n(records, limit)
}

/// The record `docshare open <name>` refers to: the newest upload with exactly that name.
pub fn find_for_open<'a>(records: &'a [DocumentRecord], file_name: &str) -> Option<&'a DocumentRecord> {
    rank_by_recency(records)
        .into_iter()
        .find(|record| record.file_name() == file_name)
}

/// Open target for `file_name`, with the path resolved against the documents directory.
pub fn open_document(
    records: &[DocumentRecord],
    file_name: &str,
    probe: &LocalFileProbe,
) -> anyhow::Result<OpenTarget> {
    let record = find_for_open(records, file_name)
        .with_context(|| format!("No document named {}", file_name))?;
    let resolved = probe.resolve(record.local_path());

    let mut target = open_target(record, probe)
        .with_context(|| format!("Document file missing: {}", resolved.display()))?;
    target.path = resolved.display().to_string();
    Ok(target)
}

/// Hand stats for every snapshot installed after subscription to `report`.
///
/// Returns when the store is dropped or `report` fails.
pub async fn watch_stats<P, F>(
    mut updates: watch::Receiver<Snapshot>,
    probe: &P,
    mut report: F,
) -> anyhow::Result<()>
where
    P: FileProbe + ?Sized,
    F: FnMut(&Snapshot, StorageStats) -> anyhow::Result<()>,
{
    while updates.changed().await.is_ok() {
        let snapshot = updates.borrow_and_update().clone();
        let stats = aggregate_with_probe(snapshot.records(), probe);
        tracing::info!(
            revision = snapshot.revision(),
            count = stats.count,
            total_mb = %stats.display_megabytes(),
            "Document stats"
        );
        report(&snapshot, stats)?;
    }
    Ok(())
}

/// Truncate a string to max_len characters, appending "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Initialize tracing for the CLI.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_string_short() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("", 5), "");
    }

    #[test]
    fn truncate_string_exact() {
        assert_eq!(truncate_string("hello", 5), "hello");
    }

    #[test]
    fn truncate_string_long() {
        assert_eq!(truncate_string("hello world", 8), "hello...");
        assert_eq!(truncate_string("ab", 2), "ab");
        assert_eq!(truncate_string("abc", 2), "...");
    }

    #[test]
    fn truncate_string_multibyte() {
        // Counts characters, never splits a code point
        assert_eq!(truncate_string("résumé-final.pdf", 8), "résum...");
        assert_eq!(truncate_string("报告报告报告.pdf", 6), "报告报...");
    }
}
