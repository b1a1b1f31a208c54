//! Document metadata extraction

mod tei;

pub use tei::{canon_from_id, canon_from_path, display_path, extract_from_str, TeiExtractor, TEI_NS};
