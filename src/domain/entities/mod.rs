//! Domain Entities
//!
//! - `DocumentMetadata` - identifying fields of one TEI document
//! - `CanonRegistry` - canon codes and their display names

mod canon;
mod document;

pub use canon::{CanonEntry, CanonRegistry};
pub use document::DocumentMetadata;
