//! Presentation helpers shared by every front end.

use chrono::DateTime;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Upload dates render like "Mar 01, 2024".
pub const UPLOAD_DATE_FORMAT: &str = "%b %d, %Y";

pub fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MEGABYTE
}

/// Megabytes with one decimal place.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.1}", megabytes(bytes))
}

/// Format a millisecond timestamp as an upload date (UTC).
///
/// Returns `None` for timestamps chrono cannot represent.
pub fn format_upload_date(timestamp_millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(timestamp_millis)
        .map(|dt| dt.format(UPLOAD_DATE_FORMAT).to_string())
}
