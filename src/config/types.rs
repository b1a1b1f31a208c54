//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::{
    AnalyzeOptions, LayoutOptions, ReportOptions, DEFAULT_DETAIL_CAP, DEFAULT_ERROR_PREVIEW,
    DEFAULT_GROUP_CAP, DEFAULT_PERIOD_THRESHOLD, DEFAULT_SAMPLE_CAP, DEFAULT_TOP,
};
use crate::application::analyze::DEFAULT_EXTENSION;
use crate::error::CanonsortResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Default `analyze` report file
pub const DEFAULT_REPORT_OUTPUT: &str = "buddhist_metadata_analysis.json";
/// Default `provenance` report file
pub const DEFAULT_PROVENANCE_OUTPUT: &str = "projectdesc_analysis.json";

/// Corpus location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusConfig {
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Canon registry JSON (`canons.json`)
    #[serde(default)]
    pub canons: Option<PathBuf>,

    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            root: None,
            canons: None,
            extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// Metadata report settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_report_output")]
    pub output: PathBuf,

    #[serde(default = "default_sample_cap")]
    pub sample_cap: usize,

    #[serde(default = "default_group_cap")]
    pub group_cap: usize,

    #[serde(default = "default_detail_cap")]
    pub detail_cap: usize,

    /// Canons listed in the console summary
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: default_report_output(),
            sample_cap: DEFAULT_SAMPLE_CAP,
            group_cap: DEFAULT_GROUP_CAP,
            detail_cap: DEFAULT_DETAIL_CAP,
            top: DEFAULT_TOP,
        }
    }
}

fn default_report_output() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_OUTPUT)
}

fn default_sample_cap() -> usize {
    DEFAULT_SAMPLE_CAP
}

fn default_group_cap() -> usize {
    DEFAULT_GROUP_CAP
}

fn default_detail_cap() -> usize {
    DEFAULT_DETAIL_CAP
}

fn default_top() -> usize {
    DEFAULT_TOP
}

/// Provenance report settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceConfig {
    #[serde(default = "default_provenance_output")]
    pub output: PathBuf,

    /// Errors shown on the console before "... and N more"
    #[serde(default = "default_error_preview")]
    pub error_preview: usize,
}

impl Default for ProvenanceConfig {
    fn default() -> Self {
        Self {
            output: default_provenance_output(),
            error_preview: DEFAULT_ERROR_PREVIEW,
        }
    }
}

fn default_provenance_output() -> PathBuf {
    PathBuf::from(DEFAULT_PROVENANCE_OUTPUT)
}

fn default_error_preview() -> usize {
    DEFAULT_ERROR_PREVIEW
}

/// Layout recommendation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Plan JSON; console only when unset
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default = "default_period_threshold")]
    pub period_threshold: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            output: None,
            period_threshold: DEFAULT_PERIOD_THRESHOLD,
        }
    }
}

fn default_period_threshold() -> usize {
    DEFAULT_PERIOD_THRESHOLD
}

/// Console output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub provenance: ProvenanceConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CanonsortResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CanonsortResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Explicit file, `./canonsort.toml`, user config, or defaults; then env
    pub fn discover(explicit: Option<&Path>) -> CanonsortResult<LoadedConfig> {
        loader::discover(explicit)
    }

    pub fn analyze_options(&self) -> AnalyzeOptions {
        AnalyzeOptions::new().with_extension(self.corpus.extension.clone())
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions::new()
            .with_sample_cap(self.report.sample_cap)
            .with_group_cap(self.report.group_cap)
            .with_detail_cap(self.report.detail_cap)
            .with_top(self.report.top)
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions::new().with_period_threshold(self.layout.period_threshold)
    }
}
