//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. This layer handles all I/O.
//!
//! ## Structure
//!
//! - `extractor/` - TEI metadata extraction (roxmltree)
//! - `registry/` - `canons.json` loading
//! - `fs/` - Atomic report writes

pub mod extractor;
pub mod fs;
pub mod registry;

pub use extractor::TeiExtractor;
pub use fs::write_atomic;
pub use registry::load_canon_registry;
