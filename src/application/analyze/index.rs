//! Aggregate index built while walking the corpus

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::DocumentMetadata;
use crate::domain::value_objects::{ClassificationResult, Origin, Period, Tradition};
use crate::error::ExtractionError;

/// Files and label tallies for one canon
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonGroup {
    pub files: Vec<String>,
    pub traditions: BTreeMap<Tradition, usize>,
    pub periods: BTreeMap<Period, usize>,
    pub origins: BTreeMap<Origin, usize>,
}

impl CanonGroup {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Most frequent tradition; ties go to the earlier table entry
    pub fn top_tradition(&self) -> Option<(Tradition, usize)> {
        rank_by_count(self.traditions.iter().map(|(t, n)| (*t, *n)))
            .into_iter()
            .next()
    }
}

/// One classified document, as listed in the detail section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub file: String,
    pub canon: Option<String>,
    pub classification: ClassificationResult,
    pub author: String,
    pub main_title: String,
    pub project_description: String,
}

/// A document excluded from classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDocument {
    pub file: String,
    pub reason: String,
}

/// Everything one corpus walk produces
///
/// Group file lists keep walk order; keyed maps iterate in key order, so
/// output built from an index is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateIndex {
    /// Documents found, including skipped ones
    pub total_files: usize,
    pub by_canon: BTreeMap<String, CanonGroup>,
    pub by_tradition: BTreeMap<Tradition, Vec<String>>,
    pub by_period: BTreeMap<Period, Vec<String>>,
    pub by_origin: BTreeMap<Origin, Vec<String>>,
    /// Keyed by flattened project description
    pub by_provenance: BTreeMap<String, Vec<String>>,
    pub details: Vec<DocumentRecord>,
    pub skipped: Vec<SkippedDocument>,
}

impl AggregateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one classified document into every grouping
    pub fn record(&mut self, doc: &DocumentMetadata, result: ClassificationResult) {
        let file = doc.file_path.clone();

        if let Some(code) = &doc.canon_code {
            let group = self.by_canon.entry(code.clone()).or_default();
            group.files.push(file.clone());
            for tradition in result.traditions() {
                *group.traditions.entry(*tradition).or_default() += 1;
            }
            *group.periods.entry(result.period()).or_default() += 1;
            *group.origins.entry(result.origin()).or_default() += 1;
        }

        for tradition in result.traditions() {
            self.by_tradition
                .entry(*tradition)
                .or_default()
                .push(file.clone());
        }
        self.by_period
            .entry(result.period())
            .or_default()
            .push(file.clone());
        self.by_origin
            .entry(result.origin())
            .or_default()
            .push(file.clone());
        self.by_provenance
            .entry(doc.project_description.clone())
            .or_default()
            .push(file.clone());

        self.details.push(DocumentRecord {
            file,
            canon: doc.canon_code.clone(),
            classification: result,
            author: doc.author.clone(),
            main_title: doc.main_title().to_string(),
            project_description: doc.project_description.clone(),
        });
    }

    pub fn record_skipped(&mut self, file: impl Into<String>, error: &ExtractionError) {
        self.skipped.push(SkippedDocument {
            file: file.into(),
            reason: error.to_string(),
        });
    }

    pub fn classified_files(&self) -> usize {
        self.details.len()
    }

    pub fn skipped_files(&self) -> usize {
        self.skipped.len()
    }
}

/// Sort `(key, count)` pairs by descending count, keeping input order on ties
pub fn rank_by_count<K>(counts: impl IntoIterator<Item = (K, usize)>) -> Vec<(K, usize)> {
    let mut ranked: Vec<(K, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// `rank_by_count` over file lists
pub fn rank_groups<K: Clone>(groups: &BTreeMap<K, Vec<String>>) -> Vec<(K, usize)> {
    rank_by_count(groups.iter().map(|(k, files)| (k.clone(), files.len())))
}
