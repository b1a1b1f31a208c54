//! Domain Ports
//!
//! Interfaces implemented by the infrastructure layer.

mod metadata_extractor;

pub use metadata_extractor::MetadataExtractor;
