//! canonsort - CBETA corpus classifier
//!
//! Classifies a TEI-XML corpus of Buddhist canonical texts by tradition,
//! historical period, geographic origin and digitization provenance, and
//! recommends a folder layout for reorganizing it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    build_provenance_report, build_report, plan_layout, walk_and_classify, AggregateIndex,
    AnalyzeOptions, LayoutOptions, LayoutPlan, MetadataReport, ProvenanceReport, ReportOptions,
};
pub use config::Config;
pub use domain::entities::{CanonRegistry, DocumentMetadata};
pub use domain::services::{
    classify, classify_geographic, classify_period, classify_provenance, classify_tradition,
    Classifier,
};
pub use domain::value_objects::{ClassificationResult, ContributorGroup, Origin, Period, Tradition};
pub use error::{CanonsortError, CanonsortResult, ExtractionError};
pub use infrastructure::{load_canon_registry, TeiExtractor};
