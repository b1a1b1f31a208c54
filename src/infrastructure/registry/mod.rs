//! Canon registry loading

mod json_canon;

pub use json_canon::{load_canon_registry, parse_canon_registry};
