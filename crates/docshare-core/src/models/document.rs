use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::category::DocumentCategory;
use crate::constants::{UNNAMED_UPLOAD_EXTENSION, UNNAMED_UPLOAD_PREFIX};

/// Metadata for one uploaded file, as stored under the user's documents node.
///
/// Fields are private: a record never changes after it is created, a refresh
/// replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    file_name: String,
    local_path: String,
    timestamp: i64,
}

impl DocumentRecord {
    pub fn new(file_name: impl Into<String>, local_path: impl Into<String>, timestamp: i64) -> Self {
        DocumentRecord {
            file_name: file_name.into(),
            local_path: local_path.into(),
            timestamp,
        }
    }

    /// Build the record written after an upload completes.
    ///
    /// `display_name` is the name reported by the file picker; when it is
    /// missing or blank the file is stored as `unnamed_<millis>.file`.
    pub fn for_upload(
        display_name: Option<&str>,
        documents_dir: &Path,
        uploaded_at: DateTime<Utc>,
    ) -> Self {
        let timestamp = uploaded_at.timestamp_millis();
        let file_name = match display_name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!(
                "{}{}{}",
                UNNAMED_UPLOAD_PREFIX, timestamp, UNNAMED_UPLOAD_EXTENSION
            ),
        };
        let local_path = documents_dir.join(&file_name).to_string_lossy().into_owned();

        DocumentRecord {
            file_name,
            local_path,
            timestamp,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn local_path(&self) -> &str {
        &self.local_path
    }

    /// Upload time in milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    pub fn category(&self) -> DocumentCategory {
        crate::classifier::classify(&self.file_name)
    }

    pub fn mime_type(&self) -> &'static str {
        crate::classifier::mime_type(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_deserializes_from_tree_child() {
        let json = serde_json::json!({
            "fileName": "Budget.xlsx",
            "localPath": "/data/user/0/app/files/documents/Budget.xlsx",
            "timestamp": 1_700_000_000_000_i64
        });

        let record: DocumentRecord = serde_json::from_value(json).unwrap();

        assert_eq!(record.file_name(), "Budget.xlsx");
        assert_eq!(
            record.local_path(),
            "/data/user/0/app/files/documents/Budget.xlsx"
        );
        assert_eq!(record.timestamp(), 1_700_000_000_000);
        assert_eq!(record.category(), DocumentCategory::Spreadsheet);
    }

    #[test]
    fn test_record_serializes_with_wire_names() {
        let record = DocumentRecord::new("a.pdf", "/docs/a.pdf", 42);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["fileName"], "a.pdf");
        assert_eq!(value["localPath"], "/docs/a.pdf");
        assert_eq!(value["timestamp"], 42);
    }

    #[test]
    fn test_for_upload_keeps_display_name() {
        let uploaded_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let record = DocumentRecord::for_upload(
            Some("Lecture Notes.pdf"),
            Path::new("/files/documents"),
            uploaded_at,
        );

        assert_eq!(record.file_name(), "Lecture Notes.pdf");
        assert_eq!(record.local_path(), "/files/documents/Lecture Notes.pdf");
        assert_eq!(record.timestamp(), uploaded_at.timestamp_millis());
        assert_eq!(record.uploaded_at(), Some(uploaded_at));
    }

    #[test]
    fn test_for_upload_without_display_name() {
        let uploaded_at = Utc.timestamp_millis_opt(1_710_000_000_123).unwrap();

        let record = DocumentRecord::for_upload(None, Path::new("/files/documents"), uploaded_at);
        assert_eq!(record.file_name(), "unnamed_1710000000123.file");
        assert_eq!(
            record.local_path(),
            "/files/documents/unnamed_1710000000123.file"
        );
        assert_eq!(record.category(), DocumentCategory::Other);

        let blank = DocumentRecord::for_upload(Some("  "), Path::new("/files/documents"), uploaded_at);
        assert_eq!(blank.file_name(), "unnamed_1710000000123.file");
    }

    #[test]
    fn test_mime_type_follows_name() {
        let record = DocumentRecord::new("photo.JPEG", "/docs/photo.JPEG", 1);
        assert_eq!(record.mime_type(), "image/jpeg");
    }
}
