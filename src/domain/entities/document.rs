//! Document entity - metadata extracted from one TEI file

use serde::Serialize;

/// Identifying fields of one corpus document
///
/// `file_path` is relative to the corpus root with `/` separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    pub id: String,
    pub canon_code: Option<String>,
    pub titles: Vec<String>,
    pub author: String,
    pub bibliographic_source: String,
    /// Flattened `<projectDesc>`, or one of the missing-description sentinels
    pub project_description: String,
    pub file_path: String,
}

impl DocumentMetadata {
    /// Create an empty record for a path
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            canon_code: None,
            titles: Vec::new(),
            author: String::new(),
            bibliographic_source: String::new(),
            project_description: String::new(),
            file_path: file_path.into(),
        }
    }

    /// First title, or empty
    pub fn main_title(&self) -> &str {
        self.titles.first().map(String::as_str).unwrap_or("")
    }

    pub fn with_titles(mut self, titles: &[&str]) -> Self {
        self.titles = titles.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.bibliographic_source = source.into();
        self
    }
}
