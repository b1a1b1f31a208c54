//! Metadata report
//!
//! Turns an `AggregateIndex` into the JSON document written by `analyze`.
//! Every map is a `BTreeMap`, so an unchanged corpus always serializes to
//! the same bytes.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::domain::entities::CanonRegistry;
use crate::domain::value_objects::{Origin, Period, Tradition};
use crate::error::CanonsortResult;
use crate::infrastructure::write_atomic;

use super::analyze::{AggregateIndex, SkippedDocument};

/// Sample files listed per canon
pub const DEFAULT_SAMPLE_CAP: usize = 5;
/// Files listed per tradition, period or origin group
pub const DEFAULT_GROUP_CAP: usize = 10;
/// Detail records kept in the report
pub const DEFAULT_DETAIL_CAP: usize = 100;
/// Canons shown in the console summary
pub const DEFAULT_TOP: usize = 10;

/// List caps for the written report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub sample_cap: usize,
    pub group_cap: usize,
    pub detail_cap: usize,
    pub top: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            sample_cap: DEFAULT_SAMPLE_CAP,
            group_cap: DEFAULT_GROUP_CAP,
            detail_cap: DEFAULT_DETAIL_CAP,
            top: DEFAULT_TOP,
        }
    }
}

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_cap(mut self, cap: usize) -> Self {
        self.sample_cap = cap;
        self
    }

    pub fn with_group_cap(mut self, cap: usize) -> Self {
        self.group_cap = cap;
        self
    }

    pub fn with_detail_cap(mut self, cap: usize) -> Self {
        self.detail_cap = cap;
        self
    }

    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total_files: usize,
    pub classified_files: usize,
    pub skipped_files: usize,
    pub canons_found: usize,
    pub traditions_found: usize,
    pub periods_found: usize,
    pub origins_found: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonSection {
    pub canon_name: String,
    pub file_count: usize,
    pub traditions: BTreeMap<Tradition, usize>,
    pub periods: BTreeMap<Period, usize>,
    pub origins: BTreeMap<Origin, usize>,
    pub sample_files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSection {
    pub file_count: usize,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailEntry {
    pub file: String,
    pub canon: Option<String>,
    pub canon_name: Option<String>,
    pub traditions: Vec<Tradition>,
    pub period: Period,
    pub origin: Origin,
    pub author: String,
    pub main_title: String,
}

/// The `analyze` JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataReport {
    pub summary: ReportSummary,
    pub by_canon: BTreeMap<String, CanonSection>,
    pub by_tradition: BTreeMap<Tradition, GroupSection>,
    pub by_period: BTreeMap<Period, GroupSection>,
    pub by_origin: BTreeMap<Origin, GroupSection>,
    pub detailed_analysis: Vec<DetailEntry>,
    pub skipped: Vec<SkippedDocument>,
}

fn capped(files: &[String], cap: usize) -> Vec<String> {
    files.iter().take(cap).cloned().collect()
}

fn group_sections<K: Ord + Copy>(
    groups: &BTreeMap<K, Vec<String>>,
    cap: usize,
) -> BTreeMap<K, GroupSection> {
    groups
        .iter()
        .map(|(key, files)| {
            (
                *key,
                GroupSection {
                    file_count: files.len(),
                    files: capped(files, cap),
                },
            )
        })
        .collect()
}

/// Build the report, applying list caps; skipped documents are never capped
pub fn build_report(
    index: &AggregateIndex,
    registry: &CanonRegistry,
    options: &ReportOptions,
) -> MetadataReport {
    let by_canon = index
        .by_canon
        .iter()
        .map(|(code, group)| {
            (
                code.clone(),
                CanonSection {
                    canon_name: registry.display_name(code).to_string(),
                    file_count: group.file_count(),
                    traditions: group.traditions.clone(),
                    periods: group.periods.clone(),
                    origins: group.origins.clone(),
                    sample_files: capped(&group.files, options.sample_cap),
                },
            )
        })
        .collect();

    let detailed_analysis = index
        .details
        .iter()
        .take(options.detail_cap)
        .map(|record| DetailEntry {
            file: record.file.clone(),
            canon: record.canon.clone(),
            canon_name: record
                .canon
                .as_deref()
                .map(|code| registry.display_name(code).to_string()),
            traditions: record.classification.traditions().to_vec(),
            period: record.classification.period(),
            origin: record.classification.origin(),
            author: record.author.clone(),
            main_title: record.main_title.clone(),
        })
        .collect();

    MetadataReport {
        summary: ReportSummary {
            total_files: index.total_files,
            classified_files: index.classified_files(),
            skipped_files: index.skipped_files(),
            canons_found: index.by_canon.len(),
            traditions_found: index.by_tradition.len(),
            periods_found: index.by_period.len(),
            origins_found: index.by_origin.len(),
        },
        by_canon,
        by_tradition: group_sections(&index.by_tradition, options.group_cap),
        by_period: group_sections(&index.by_period, options.group_cap),
        by_origin: group_sections(&index.by_origin, options.group_cap),
        detailed_analysis,
        skipped: index.skipped.clone(),
    }
}

/// Serialize any report as pretty JSON and write it atomically
pub fn write_json<T: Serialize>(value: &T, output: &Path) -> CanonsortResult<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    write_atomic(output, json.as_bytes())
}

/// Build and write the metadata report
pub fn write_report(
    index: &AggregateIndex,
    registry: &CanonRegistry,
    output: &Path,
    options: &ReportOptions,
) -> CanonsortResult<MetadataReport> {
    let report = build_report(index, registry, options);
    write_json(&report, output)?;
    Ok(report)
}
