//! Table and JSON rendering for CLI output.

use docshare_core::display::format_upload_date;
use docshare_core::{DocumentCategory, DocumentRecord, OpenTarget, StorageStats};
use serde::Serialize;
use std::io::{self, Write};

use crate::truncate_string;

/// One document as printed by `list`, `recent` and `home`.
#[derive(Debug, Serialize)]
pub struct DocumentRow {
    pub file_name: String,
    pub category: DocumentCategory,
    pub mime_type: &'static str,
    pub timestamp: i64,
    pub uploaded_on: Option<String>,
    pub local_path: String,
}

impl From<&DocumentRecord> for DocumentRow {
    fn from(record: &DocumentRecord) -> Self {
        DocumentRow {
            file_name: record.file_name().to_string(),
            category: record.category(),
            mime_type: record.mime_type(),
            timestamp: record.timestamp(),
            uploaded_on: format_upload_date(record.timestamp()),
            local_path: record.local_path().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DocumentList {
    pub items: Vec<DocumentRow>,
    pub total_count: usize,
    /// Records in the snapshot before filtering
    pub source_count: usize,
}

impl DocumentList {
    pub fn new(records: &[&DocumentRecord], source_count: usize) -> Self {
        let items: Vec<DocumentRow> = records.iter().map(|r| DocumentRow::from(*r)).collect();
        DocumentList {
            total_count: items.len(),
            items,
            source_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub total_documents: u64,
    pub total_size_bytes: u64,
    pub total_size_mb: String,
}

impl From<StorageStats> for StatsReport {
    fn from(stats: StorageStats) -> Self {
        StatsReport {
            total_documents: stats.count,
            total_size_bytes: stats.total_bytes,
            total_size_mb: stats.display_megabytes(),
        }
    }
}

pub fn write_json<W: Write>(out: &mut W, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

pub fn write_document_table<W: Write>(out: &mut W, title: &str, list: &DocumentList) -> io::Result<()> {
    writeln!(out, "\n=== {} ===\n", title)?;

    if list.source_count == 0 {
        writeln!(out, "No documents yet.")?;
        return Ok(());
    }
    if list.items.is_empty() {
        writeln!(
            out,
            "No documents match ({} in total).",
            list.source_count
        )?;
        return Ok(());
    }

    writeln!(
        out,
        "Showing {} of {} documents",
        list.total_count, list.source_count
    )?;
    writeln!(
        out,
        "\n{:<5} {:<40} {:<13} {}",
        "Type", "File Name", "Uploaded", "Local Path"
    )?;
    writeln!(out, "{}", "-".repeat(100))?;

    for item in &list.items {
        writeln!(
            out,
            "{:<5} {:<40} {:<13} {}",
            item.category.label(),
            truncate_string(&item.file_name, 40),
            item.uploaded_on.as_deref().unwrap_or("-"),
            item.local_path
        )?;
    }

    writeln!(out)
}

pub fn write_stats_table<W: Write>(out: &mut W, report: &StatsReport) -> io::Result<()> {
    writeln!(out, "\n=== Document Statistics ===\n")?;
    writeln!(out, "Total Documents: {}", report.total_documents)?;
    writeln!(
        out,
        "Storage Used:    {} MB ({} bytes)",
        report.total_size_mb, report.total_size_bytes
    )?;
    writeln!(out)
}

pub fn write_open_target<W: Write>(out: &mut W, target: &OpenTarget) -> io::Result<()> {
    writeln!(out, "{}\t{}", target.mime_type, target.path)
}
