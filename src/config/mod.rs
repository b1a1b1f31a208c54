//! Configuration module for canonsort
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CANONSORT_*)
//! 3. Config file (`--config`, `./canonsort.toml`, or `<config dir>/canonsort/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    discover, parse_with_warnings, with_env_overrides_from, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{
    ColorMode, Config, CorpusConfig, LayoutConfig, OutputConfig, ProvenanceConfig, ReportConfig,
    DEFAULT_PROVENANCE_OUTPUT, DEFAULT_REPORT_OUTPUT,
};
