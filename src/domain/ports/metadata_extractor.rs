//! MetadataExtractor port - abstraction for reading one corpus document
//!
//! The corpus walker only needs "path in, metadata out"; the TEI parser lives
//! in the infrastructure layer.

use std::path::Path;

use crate::domain::entities::DocumentMetadata;
use crate::error::ExtractionError;

/// Turns one document on disk into a metadata record
pub trait MetadataExtractor {
    /// Extract `root/relative`
    ///
    /// `relative` becomes the record's `file_path`. Failures are per-document
    /// and never abort a run.
    fn extract(&self, root: &Path, relative: &Path) -> Result<DocumentMetadata, ExtractionError>;
}
