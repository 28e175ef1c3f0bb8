//! Extension-based document classification.
//!
//! Both lookups compare the lower-cased file name against a fixed suffix table,
//! so they are total: any string, including the empty one, gets an answer.

use crate::constants::FALLBACK_MIME_TYPE;
use crate::models::DocumentCategory;

struct ExtensionRule {
    suffix: &'static str,
    category: DocumentCategory,
    mime_type: &'static str,
}

const EXTENSION_RULES: &[ExtensionRule] = &[
    ExtensionRule {
        suffix: ".pdf",
        category: DocumentCategory::Pdf,
        mime_type: "application/pdf",
    },
    ExtensionRule {
        suffix: ".doc",
        category: DocumentCategory::Word,
        mime_type: "application/msword",
    },
    ExtensionRule {
        suffix: ".docx",
        category: DocumentCategory::Word,
        mime_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    },
    ExtensionRule {
        suffix: ".xls",
        category: DocumentCategory::Spreadsheet,
        mime_type: "application/vnd.ms-excel",
    },
    ExtensionRule {
        suffix: ".xlsx",
        category: DocumentCategory::Spreadsheet,
        mime_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    },
    ExtensionRule {
        suffix: ".ppt",
        category: DocumentCategory::Presentation,
        mime_type: "application/vnd.ms-powerpoint",
    },
    ExtensionRule {
        suffix: ".pptx",
        category: DocumentCategory::Presentation,
        mime_type: "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    },
    ExtensionRule {
        suffix: ".jpg",
        category: DocumentCategory::Image,
        mime_type: "image/jpeg",
    },
    ExtensionRule {
        suffix: ".jpeg",
        category: DocumentCategory::Image,
        mime_type: "image/jpeg",
    },
    ExtensionRule {
        suffix: ".png",
        category: DocumentCategory::Image,
        mime_type: "image/png",
    },
    ExtensionRule {
        suffix: ".gif",
        category: DocumentCategory::Image,
        mime_type: "image/gif",
    },
];

fn rule_for(file_name: &str) -> Option<&'static ExtensionRule> {
    let lower = file_name.to_lowercase();
    EXTENSION_RULES
        .iter()
        .find(|rule| lower.ends_with(rule.suffix))
}

/// Classify a file name by extension. Never returns [`DocumentCategory::All`].
pub fn classify(file_name: &str) -> DocumentCategory {
    rule_for(file_name)
        .map(|rule| rule.category)
        .unwrap_or(DocumentCategory::Other)
}

/// MIME type to hand to an external viewer; `*/*` for unknown extensions.
pub fn mime_type(file_name: &str) -> &'static str {
    rule_for(file_name)
        .map(|rule| rule.mime_type)
        .unwrap_or(FALLBACK_MIME_TYPE)
}
