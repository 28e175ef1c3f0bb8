//! Document count and storage used.

use serde::Serialize;

use crate::display::{format_megabytes, megabytes};
use crate::hooks::FileProbe;
use crate::models::DocumentRecord;

/// Aggregate stats for one snapshot. Sizes are raw bytes; use
/// [`StorageStats::megabytes`] or [`StorageStats::display_megabytes`] for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StorageStats {
    pub count: u64,
    pub total_bytes: u64,
}

impl StorageStats {
    pub fn megabytes(&self) -> f64 {
        megabytes(self.total_bytes)
    }

    /// Storage used in MB with one decimal place, e.g. "1.5".
    pub fn display_megabytes(&self) -> String {
        format_megabytes(self.total_bytes)
    }
}

/// Count every record and sum the sizes of those whose local file exists.
///
/// Missing files count towards `count` but contribute no bytes.
pub fn aggregate<E, S>(records: &[DocumentRecord], mut file_exists: E, mut file_size: S) -> StorageStats
where
    E: FnMut(&str) -> bool,
    S: FnMut(&str) -> u64,
{
    let mut missing = 0usize;
    let total_bytes = records.iter().fold(0u64, |total, record| {
        if file_exists(record.local_path()) {
            total.saturating_add(file_size(record.local_path()))
        } else {
            missing += 1;
            total
        }
    });

    if missing > 0 {
        tracing::debug!(
            missing = missing,
            count = records.len(),
            "Local files missing while aggregating storage stats"
        );
    }

    StorageStats {
        count: records.len() as u64,
        total_bytes,
    }
}

/// [`aggregate`] with both collaborators taken from a [`FileProbe`].
pub fn aggregate_with_probe<P: FileProbe + ?Sized>(records: &[DocumentRecord], probe: &P) -> StorageStats {
    aggregate(records, |path| probe.exists(path), |path| probe.size(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::NoOpFileProbe;
    use std::collections::HashMap;

    struct FakeProbe {
        files: HashMap<&'static str, u64>,
    }

    impl FileProbe for FakeProbe {
        fn exists(&self, path: &str) -> bool {
            self.files.contains_key(path)
        }

        fn size(&self, path: &str) -> u64 {
            self.files.get(path).copied().unwrap_or(0)
        }
    }

    #[test]
    fn test_missing_file_contributes_zero() {
        let records = vec![DocumentRecord::new("gone.pdf", "missing", 1)];
        let stats = aggregate(&records, |_| false, |_| 999);
        assert_eq!(
            stats,
            StorageStats {
                count: 1,
                total_bytes: 0
            }
        );
    }

    #[test]
    fn test_sums_existing_files_only() {
        let probe = FakeProbe {
            files: HashMap::from([("/d/a.pdf", 1024 * 1024), ("/d/b.png", 512 * 1024)]),
        };
        let records = vec![
            DocumentRecord::new("a.pdf", "/d/a.pdf", 1),
            DocumentRecord::new("b.png", "/d/b.png", 2),
            DocumentRecord::new("c.docx", "/d/c.docx", 3),
        ];

        let stats = aggregate_with_probe(&records, &probe);

        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_bytes, 1_572_864);
        assert_eq!(stats.display_megabytes(), "1.5");
        assert!((stats.megabytes() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_size_not_queried_for_missing_files() {
        let records = vec![
            DocumentRecord::new("a.pdf", "/d/a.pdf", 1),
            DocumentRecord::new("b.pdf", "/d/b.pdf", 2),
        ];
        let mut size_calls = Vec::new();
        let stats = aggregate(
            &records,
            |path| path == "/d/b.pdf",
            |path| {
                size_calls.push(path.to_string());
                10
            },
        );

        assert_eq!(stats.total_bytes, 10);
        assert_eq!(size_calls, vec!["/d/b.pdf".to_string()]);
    }

    #[test]
    fn test_duplicate_paths_are_counted_per_record() {
        let records = vec![
            DocumentRecord::new("a.pdf", "/d/a.pdf", 1),
            DocumentRecord::new("a.pdf", "/d/a.pdf", 2),
        ];
        let stats = aggregate(&records, |_| true, |_| 100);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_bytes, 200);
    }

    #[test]
    fn test_empty_snapshot() {
        let stats = aggregate_with_probe(&[], &NoOpFileProbe);
        assert_eq!(stats, StorageStats::default());
        assert_eq!(stats.display_megabytes(), "0.0");
    }

    #[test]
    fn test_total_saturates() {
        let records = vec![
            DocumentRecord::new("a", "/a", 1),
            DocumentRecord::new("b", "/b", 2),
        ];
        let stats = aggregate(&records, |_| true, |_| u64::MAX);
        assert_eq!(stats.total_bytes, u64::MAX);
    }
}
