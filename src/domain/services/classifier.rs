//! Keyword classifier
//!
//! Maps document text to tradition, period and origin labels by substring
//! containment against ordered keyword tables. Every function here is pure.

use crate::domain::entities::DocumentMetadata;
use crate::domain::value_objects::{ClassificationResult, Origin, Period, Tradition};

use super::keyword_tables::{
    KeywordTable, CONTEMPORARY_ERA_KEYWORDS, DYNASTY_MARKERS, MODERN_ERA_KEYWORDS,
    ORDINATION_MARKER, ORIGIN_TABLE, PERIOD_TABLE, TRADITION_TABLE,
};

/// Classifier over a set of keyword tables
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    traditions: KeywordTable<Tradition>,
    periods: KeywordTable<Period>,
    origins: KeywordTable<Origin>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(TRADITION_TABLE, PERIOD_TABLE, ORIGIN_TABLE)
    }
}

impl Classifier {
    pub const fn new(
        traditions: KeywordTable<Tradition>,
        periods: KeywordTable<Period>,
        origins: KeywordTable<Origin>,
    ) -> Self {
        Self {
            traditions,
            periods,
            origins,
        }
    }

    /// Classify one document on all three dimensions
    pub fn classify(&self, doc: &DocumentMetadata) -> ClassificationResult {
        let text = tradition_text(&doc.titles, &doc.author, &doc.bibliographic_source);
        ClassificationResult::new(
            self.classify_tradition(&text),
            self.classify_period(&doc.author, &doc.bibliographic_source, &doc.titles),
            self.classify_geographic(&doc.author, &doc.bibliographic_source, &doc.titles),
        )
    }

    /// Every tradition with at least one keyword in `text`, in table order
    ///
    /// Comparison is case-insensitive. Never empty.
    pub fn classify_tradition(&self, text: &str) -> Vec<Tradition> {
        let text = text.to_lowercase();
        let matched: Vec<Tradition> = self
            .traditions
            .iter()
            .filter(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|keyword| text.contains(keyword.to_lowercase().as_str()))
            })
            .map(|(tradition, _)| *tradition)
            .collect();

        if matched.is_empty() {
            vec![Tradition::Unspecified]
        } else {
            matched
        }
    }

    /// First table period present in the text, then the era fallbacks
    pub fn classify_period(&self, author: &str, source: &str, titles: &[String]) -> Period {
        let text = classification_text(author, source, titles);

        if let Some(period) = first_match(self.periods, &text) {
            return period;
        }

        if contains_any(&text, MODERN_ERA_KEYWORDS) {
            Period::Modern
        } else if contains_any(&text, CONTEMPORARY_ERA_KEYWORDS) {
            Period::Contemporary
        } else if author.contains(ORDINATION_MARKER) && contains_any(&text, DYNASTY_MARKERS) {
            Period::TraditionalChinese
        } else {
            Period::Unknown
        }
    }

    /// First table origin present in the text
    pub fn classify_geographic(&self, author: &str, source: &str, titles: &[String]) -> Origin {
        let text = classification_text(author, source, titles);
        first_match(self.origins, &text).unwrap_or(Origin::Unknown)
    }
}

/// Classify with the built-in tables
pub fn classify(doc: &DocumentMetadata) -> ClassificationResult {
    Classifier::default().classify(doc)
}

/// Tradition labels for already-concatenated text, using the built-in table
pub fn classify_tradition(text: &str) -> Vec<Tradition> {
    Classifier::default().classify_tradition(text)
}

pub fn classify_period(author: &str, source: &str, titles: &[String]) -> Period {
    Classifier::default().classify_period(author, source, titles)
}

pub fn classify_geographic(author: &str, source: &str, titles: &[String]) -> Origin {
    Classifier::default().classify_geographic(author, source, titles)
}

/// Text searched for tradition keywords: titles, author, source
///
/// A leading ordination surname is dropped from the author; it would
/// otherwise hit the commentary keyword of the same character.
pub fn tradition_text(titles: &[String], author: &str, source: &str) -> String {
    let author = author.strip_prefix(ORDINATION_MARKER).unwrap_or(author);
    let mut parts: Vec<&str> = titles.iter().map(String::as_str).collect();
    parts.push(author);
    parts.push(source);
    parts.join(" ").to_lowercase()
}

/// Text searched for period and origin keywords: author, source, titles
fn classification_text(author: &str, source: &str, titles: &[String]) -> String {
    let mut parts = vec![author, source];
    parts.extend(titles.iter().map(String::as_str));
    parts.join(" ")
}

fn first_match<L: Copy>(table: KeywordTable<L>, text: &str) -> Option<L> {
    table
        .iter()
        .find(|(_, keywords)| contains_any(text, keywords))
        .map(|(label, _)| *label)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
