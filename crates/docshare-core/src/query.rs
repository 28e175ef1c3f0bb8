//! Search and category filtering over a snapshot.
//!
//! Filtering never reorders: the result is always a subsequence of the input.

use serde::{Deserialize, Serialize};

use crate::classifier::classify;
use crate::models::{DocumentCategory, DocumentRecord};

/// Search box text plus the selected filter chip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentQuery {
    /// Free text matched as a case-insensitive substring of the file name
    pub text: String,
    pub category: DocumentCategory,
}

/// Result of running a [`DocumentQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome<'a> {
    pub matches: Vec<&'a DocumentRecord>,
    /// True when the snapshot itself had no records, as opposed to nothing matching.
    pub source_empty: bool,
}

impl<'a> QueryOutcome<'a> {
    /// Records exist but none pass the current search/filter.
    pub fn no_matches(&self) -> bool {
        !self.source_empty && self.matches.is_empty()
    }
}

impl DocumentQuery {
    pub fn new(text: impl Into<String>, category: DocumentCategory) -> Self {
        DocumentQuery {
            text: text.into(),
            category,
        }
    }

    pub fn matches(&self, record: &DocumentRecord) -> bool {
        Matcher::new(&self.text, self.category).matches(record)
    }

    pub fn run<'a>(&self, records: &'a [DocumentRecord]) -> QueryOutcome<'a> {
        QueryOutcome {
            matches: filter(records, &self.text, self.category),
            source_empty: records.is_empty(),
        }
    }
}

/// Query text folded once, so each record only pays for folding its own name.
struct Matcher {
    needle: String,
    category: DocumentCategory,
}

impl Matcher {
    fn new(query: &str, category: DocumentCategory) -> Self {
        Matcher {
            needle: query.to_lowercase(),
            category,
        }
    }

    fn matches(&self, record: &DocumentRecord) -> bool {
        self.matches_text(record.file_name()) && self.category.admits(classify(record.file_name()))
    }

    fn matches_text(&self, file_name: &str) -> bool {
        self.needle.is_empty() || file_name.to_lowercase().contains(&self.needle)
    }
}

/// Case-insensitive substring test used by both the documents list and the home search.
pub fn matches_text(file_name: &str, query: &str) -> bool {
    Matcher::new(query, DocumentCategory::All).matches_text(file_name)
}

/// Keep the records whose name contains `query` and whose class passes `category`.
pub fn filter<'a>(
    records: &'a [DocumentRecord],
    query: &str,
    category: DocumentCategory,
) -> Vec<&'a DocumentRecord> {
    let matcher = Matcher::new(query, category);
    records.iter().filter(|record| matcher.matches(record)).collect()
}
