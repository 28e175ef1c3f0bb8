//! Parsing of the remote document tree.
//!
//! The realtime store keeps a user's documents as a JSON object keyed by
//! push identifiers:
//!
//! ```json
//! {
//!   "-NqA1x": { "fileName": "a.pdf", "localPath": "/files/documents/a.pdf", "timestamp": 1709294400000 },
//!   "-NqA2y": { "fileName": "b.png", "localPath": "/files/documents/b.png", "timestamp": 1709294500000 }
//! }
//! ```
//!
//! Children that do not parse are dropped one by one; only a payload that is
//! not a tree at all fails the whole refresh.

use serde_json::Value as JsonValue;

use crate::error::{DocshareError, DocshareResult};
use crate::models::DocumentRecord;

/// Records recovered from one tree payload.
#[derive(Debug, Default)]
pub struct ParsedTree {
    pub records: Vec<DocumentRecord>,
    /// Number of children skipped as malformed
    pub dropped: usize,
}

/// Parse a document tree value.
///
/// Accepts an object (children visited in key order, which for push
/// identifiers is upload order), an array (children in index order, `null`
/// slots skipped) or `null` for a user with no documents.
pub fn parse_document_tree(value: &JsonValue) -> DocshareResult<ParsedTree> {
    let mut parsed = ParsedTree::default();

    match value {
        JsonValue::Null => {}
        JsonValue::Object(children) => {
            for (key, child) in children {
                collect_child(&mut parsed, key, child);
            }
        }
        JsonValue::Array(children) => {
            for (index, child) in children.iter().enumerate() {
                if child.is_null() {
                    continue;
                }
                collect_child(&mut parsed, &index.to_string(), child);
            }
        }
        other => {
            return Err(DocshareError::InvalidTree(format!(
                "expected an object of documents, found {}",
                json_kind(other)
            )));
        }
    }

    if parsed.dropped > 0 {
        tracing::warn!(
            kept = parsed.records.len(),
            dropped = parsed.dropped,
            "Dropped malformed document records from tree"
        );
    }

    Ok(parsed)
}

/// Parse a document tree from its JSON text.
pub fn parse_document_tree_str(text: &str) -> DocshareResult<ParsedTree> {
    let value: JsonValue = serde_json::from_str(text)
        .map_err(|e| DocshareError::InvalidTree(format!("not valid JSON: {}", e)))?;
    parse_document_tree(&value)
}

fn collect_child(parsed: &mut ParsedTree, key: &str, child: &JsonValue) {
    match parse_child(key, child) {
        Ok(record) => parsed.records.push(record),
        Err(e) => {
            tracing::warn!(error = %e, "Skipping document record");
            parsed.dropped += 1;
        }
    }
}

fn parse_child(key: &str, child: &JsonValue) -> DocshareResult<DocumentRecord> {
    if !child.is_object() {
        return Err(DocshareError::MalformedRecord {
            key: key.to_string(),
            reason: format!("expected an object, found {}", json_kind(child)),
        });
    }

    let record: DocumentRecord =
        serde_json::from_value(child.clone()).map_err(|e| DocshareError::MalformedRecord {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

    if record.file_name().is_empty() {
        return Err(DocshareError::MalformedRecord {
            key: key.to_string(),
            reason: "fileName is empty".to_string(),
        });
    }

    Ok(record)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
