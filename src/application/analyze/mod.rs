//! Analyze Use Case
//!
//! Corpus walk and aggregation.
//!
//! This module handles:
//! - Discovering documents under the corpus root
//! - Extracting and classifying each document
//! - Recording per-document failures without aborting

mod index;
mod options;
mod use_case;

use std::path::Path;

use crate::domain::entities::CanonRegistry;
use crate::error::CanonsortResult;
use crate::infrastructure::TeiExtractor;

pub use index::{
    rank_by_count, rank_groups, AggregateIndex, CanonGroup, DocumentRecord, SkippedDocument,
};
pub use options::{AnalyzeOptions, DEFAULT_EXTENSION, DEFAULT_PROGRESS_EVERY};
pub use use_case::{discover_documents, AnalyzeUseCase, Discovery};

/// Walk `root` with the TEI extractor and the built-in keyword tables
pub fn walk_and_classify(
    root: &Path,
    registry: &CanonRegistry,
    options: &AnalyzeOptions,
) -> CanonsortResult<AggregateIndex> {
    AnalyzeUseCase::new(TeiExtractor::new(registry)).execute(root, options)
}
