//! Home screen feed: latest uploads, or search results across everything.

use crate::models::DocumentRecord;
use crate::query::matches_text;
use crate::recency::{rank_by_recency, top_n};

/// Records shown on the home screen.
///
/// With an empty search box this is the `recent_limit` newest uploads. Once the
/// user types, every matching record is returned, newest first, without the
/// limit.
pub fn home_feed<'a>(
    records: &'a [DocumentRecord],
    query: &str,
    recent_limit: usize,
) -> Vec<&'a DocumentRecord> {
    if query.is_empty() {
        return top_n(records, i64::try_from(recent_limit).unwrap_or(i64::MAX));
    }

    rank_by_recency(records)
        .into_iter()
        .filter(|record| matches_text(record.file_name(), query))
        .collect()
}
