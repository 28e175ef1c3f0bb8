//! Most-recent-first ordering.

use crate::models::DocumentRecord;

/// Sort by upload timestamp, newest first.
///
/// The sort is stable: records uploaded in the same millisecond keep their
/// snapshot order.
pub fn rank_by_recency(records: &[DocumentRecord]) -> Vec<&DocumentRecord> {
    let mut ranked: Vec<&DocumentRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    ranked
}

/// The `n` most recent records. `n <= 0` yields nothing.
pub fn top_n(records: &[DocumentRecord], n: i64) -> Vec<&DocumentRecord> {
    if n <= 0 {
        return Vec::new();
    }
    let limit = usize::try_from(n).unwrap_or(usize::MAX);

    let mut ranked = rank_by_recency(records);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, timestamp: i64) -> DocumentRecord {
        DocumentRecord::new(name, format!("/docs/{}", name), timestamp)
    }

    fn names<'a>(records: &[&'a DocumentRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.file_name()).collect()
    }

    #[test]
    fn test_rank_descending() {
        let records = vec![record("old", 10), record("new", 30), record("mid", 20)];
        assert_eq!(names(&rank_by_recency(&records)), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let records = vec![record("A", 100), record("B", 100), record("C", 50)];
        assert_eq!(names(&rank_by_recency(&records)), vec!["A", "B", "C"]);

        let records = vec![record("C", 50), record("B", 100), record("A", 100)];
        assert_eq!(names(&rank_by_recency(&records)), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_rank_does_not_touch_input() {
        let records = vec![record("a", 1), record("b", 2)];
        let _ = rank_by_recency(&records);
        assert_eq!(records[0].file_name(), "a");
    }

    #[test]
    fn test_top_n() {
        let records = vec![record("A", 3), record("B", 1), record("C", 2)];
        assert_eq!(names(&top_n(&records, 2)), vec!["A", "C"]);
    }

    #[test]
    fn test_top_n_larger_than_len() {
        let records = vec![record("A", 3), record("B", 1)];
        assert_eq!(names(&top_n(&records, 10)), vec!["A", "B"]);
        assert_eq!(names(&top_n(&records, i64::MAX)), vec!["A", "B"]);
    }

    #[test]
    fn test_top_n_non_positive() {
        let records = vec![record("A", 3)];
        assert!(top_n(&records, 0).is_empty());
        assert!(top_n(&records, -5).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_by_recency(&[]).is_empty());
        assert!(top_n(&[], 3).is_empty());
    }
}
