use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Document type category
///
/// `All` is a filter-only value: [`crate::classify`] never returns it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    Pdf,
    Word,
    Spreadsheet,
    Presentation,
    Image,
    Other,
    #[default]
    All,
}

impl DocumentCategory {
    /// Every category a real document can classify as, in display order.
    pub const CLASSIFIED: [DocumentCategory; 6] = [
        DocumentCategory::Pdf,
        DocumentCategory::Word,
        DocumentCategory::Spreadsheet,
        DocumentCategory::Presentation,
        DocumentCategory::Image,
        DocumentCategory::Other,
    ];

    /// True when a document of class `classified` passes this filter.
    pub fn admits(self, classified: DocumentCategory) -> bool {
        self == DocumentCategory::All || self == classified
    }

    /// Short label used on filter chips and in table output.
    pub fn label(self) -> &'static str {
        match self {
            DocumentCategory::Pdf => "PDF",
            DocumentCategory::Word => "DOC",
            DocumentCategory::Spreadsheet => "XLS",
            DocumentCategory::Presentation => "PPT",
            DocumentCategory::Image => "IMG",
            DocumentCategory::Other => "FILE",
            DocumentCategory::All => "ALL",
        }
    }
}

impl Display for DocumentCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DocumentCategory::Pdf => write!(f, "pdf"),
            DocumentCategory::Word => write!(f, "word"),
            DocumentCategory::Spreadsheet => write!(f, "spreadsheet"),
            DocumentCategory::Presentation => write!(f, "presentation"),
            DocumentCategory::Image => write!(f, "image"),
            DocumentCategory::Other => write!(f, "other"),
            DocumentCategory::All => write!(f, "all"),
        }
    }
}

impl FromStr for DocumentCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(DocumentCategory::Pdf),
            "doc" | "word" => Ok(DocumentCategory::Word),
            "xls" | "spreadsheet" => Ok(DocumentCategory::Spreadsheet),
            "ppt" | "presentation" => Ok(DocumentCategory::Presentation),
            "img" | "image" => Ok(DocumentCategory::Image),
            "other" => Ok(DocumentCategory::Other),
            "all" => Ok(DocumentCategory::All),
            _ => Err(anyhow::anyhow!("Invalid document category: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_chip_ids() {
        assert_eq!("pdf".parse::<DocumentCategory>().unwrap(), DocumentCategory::Pdf);
        assert_eq!("doc".parse::<DocumentCategory>().unwrap(), DocumentCategory::Word);
        assert_eq!(
            "xls".parse::<DocumentCategory>().unwrap(),
            DocumentCategory::Spreadsheet
        );
        assert_eq!(
            "ppt".parse::<DocumentCategory>().unwrap(),
            DocumentCategory::Presentation
        );
        assert_eq!("img".parse::<DocumentCategory>().unwrap(), DocumentCategory::Image);
        assert_eq!("ALL".parse::<DocumentCategory>().unwrap(), DocumentCategory::All);
    }

    #[test]
    fn test_category_display_round_trips() {
        for category in DocumentCategory::CLASSIFIED {
            let parsed: DocumentCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_from_str_rejects_unknown() {
        assert!("zip".parse::<DocumentCategory>().is_err());
        assert!("".parse::<DocumentCategory>().is_err());
    }

    #[test]
    fn test_all_admits_everything() {
        for category in DocumentCategory::CLASSIFIED {
            assert!(DocumentCategory::All.admits(category));
        }
        assert!(DocumentCategory::Pdf.admits(DocumentCategory::Pdf));
        assert!(!DocumentCategory::Pdf.admits(DocumentCategory::Image));
    }

    #[test]
    fn test_classified_excludes_all() {
        assert!(!DocumentCategory::CLASSIFIED.contains(&DocumentCategory::All));
        assert_eq!(DocumentCategory::default(), DocumentCategory::All);
    }
}
