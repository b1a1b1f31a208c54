//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AnalyzeUseCase` / `walk_and_classify` - Walk the corpus into an `AggregateIndex`
//! - `build_report` / `write_report` - Metadata report
//! - `build_provenance_report` / `write_provenance_report` - Provenance report
//! - `plan_layout` - Recommended folder layout

pub mod analyze;
pub mod layout;
pub mod provenance;
pub mod report;

pub use analyze::{
    discover_documents, rank_by_count, rank_groups, walk_and_classify, AggregateIndex,
    AnalyzeOptions, AnalyzeUseCase, CanonGroup, Discovery, DocumentRecord, SkippedDocument,
};
pub use layout::{
    plan_layout, write_layout_plan, Assignment, CanonFolder, LayoutOptions, LayoutPlan,
    DEFAULT_PERIOD_THRESHOLD,
};
pub use provenance::{
    build_provenance_report, write_provenance_report, ContributorSection, ProjectGroup,
    ProvenanceIssue, ProvenanceReport, ProvenanceSummary, DEFAULT_ERROR_PREVIEW,
};
pub use report::{
    build_report, write_json, write_report, CanonSection, DetailEntry, GroupSection,
    MetadataReport, ReportOptions, ReportSummary, DEFAULT_DETAIL_CAP, DEFAULT_GROUP_CAP,
    DEFAULT_SAMPLE_CAP, DEFAULT_TOP,
};
