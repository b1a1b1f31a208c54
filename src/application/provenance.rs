//! Provenance report
//!
//! Groups documents by their flattened `<projectDesc>` text and buckets
//! each description into a contributor group.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::domain::services::classify_provenance;
use crate::domain::value_objects::{is_missing_description, ContributorGroup};
use crate::error::CanonsortResult;

use super::analyze::AggregateIndex;
use super::report::write_json;

/// Errors listed in the console summary
pub const DEFAULT_ERROR_PREVIEW: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvenanceSummary {
    pub total_files: usize,
    pub unique_project_desc_count: usize,
    pub files_with_errors: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectGroup {
    pub file_count: usize,
    pub contributor_group: ContributorGroup,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributorSection {
    pub file_count: usize,
    /// Distinct descriptions in this group
    pub categories: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvenanceIssue {
    pub file: String,
    pub issue: String,
}

/// The `provenance` JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvenanceReport {
    pub summary: ProvenanceSummary,
    pub project_groups: BTreeMap<String, ProjectGroup>,
    pub contributor_groups: BTreeMap<ContributorGroup, ContributorSection>,
    pub errors: Vec<ProvenanceIssue>,
}

/// Build the provenance report
///
/// Documents with a placeholder description stay in `project_groups` and
/// are also listed in `errors`, after every skipped document.
pub fn build_provenance_report(index: &AggregateIndex) -> ProvenanceReport {
    let mut project_groups = BTreeMap::new();
    let mut contributor_groups: BTreeMap<ContributorGroup, ContributorSection> = BTreeMap::new();

    for (description, files) in &index.by_provenance {
        let group = classify_provenance(description);
        let section = contributor_groups
            .entry(group)
            .or_insert(ContributorSection {
                file_count: 0,
                categories: 0,
            });
        section.file_count += files.len();
        section.categories += 1;

        project_groups.insert(
            description.clone(),
            ProjectGroup {
                file_count: files.len(),
                contributor_group: group,
                files: files.clone(),
            },
        );
    }

    let mut errors: Vec<ProvenanceIssue> = index
        .skipped
        .iter()
        .map(|skipped| ProvenanceIssue {
            file: skipped.file.clone(),
            issue: skipped.reason.clone(),
        })
        .collect();
    errors.extend(
        index
            .details
            .iter()
            .filter(|record| is_missing_description(&record.project_description))
            .map(|record| ProvenanceIssue {
                file: record.file.clone(),
                issue: record.project_description.clone(),
            }),
    );

    ProvenanceReport {
        summary: ProvenanceSummary {
            total_files: index.total_files,
            unique_project_desc_count: project_groups.len(),
            files_with_errors: errors.len(),
        },
        project_groups,
        contributor_groups,
        errors,
    }
}

/// Build and write the provenance report
pub fn write_provenance_report(
    index: &AggregateIndex,
    output: &Path,
) -> CanonsortResult<ProvenanceReport> {
    let report = build_provenance_report(index);
    write_json(&report, output)?;
    Ok(report)
}
