//! Command handlers
//!
//! Each handler resolves its settings (CLI flag, then environment, then
//! config file, then defaults), runs the library use case and prints a view.

pub mod analyze;
pub mod provenance;
pub mod recommend;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use canonsort::config::Config;
use canonsort::domain::entities::CanonRegistry;
use canonsort::load_canon_registry;

/// Corpus root from the flag or the config; one of them must name it
pub(crate) fn resolve_root(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    flag.or_else(|| config.corpus.root.clone()).context(
        "no corpus root given: pass --root, set CANONSORT_ROOT, or set corpus.root in canonsort.toml",
    )
}

/// Load the canon registry; without one, canon names fall back to their codes
pub(crate) fn load_registry(flag: Option<PathBuf>, config: &Config) -> Result<CanonRegistry> {
    match flag.or_else(|| config.corpus.canons.clone()) {
        Some(path) => load_canon_registry(&path)
            .with_context(|| format!("failed to load canon registry {}", path.display())),
        None => {
            warn!("no canon registry configured; canon names fall back to codes");
            Ok(CanonRegistry::new())
        }
    }
}

pub(crate) fn display(path: &Path) -> String {
    path.display().to_string()
}
