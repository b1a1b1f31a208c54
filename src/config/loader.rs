//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{CanonsortError, CanonsortResult};

use super::types::Config;

/// Project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "canonsort.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration plus where it came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CanonsortResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| CanonsortError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content; `path` is only used for messages
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> CanonsortResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CanonsortError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find and load configuration, then apply environment overrides
///
/// An explicit path must exist. Otherwise the first of
/// `./canonsort.toml` and `<config dir>/canonsort/config.toml` wins, falling
/// back to defaults.
pub fn discover(explicit: Option<&Path>) -> CanonsortResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => candidate_paths().into_iter().find(|p| p.is_file()),
    };

    let loaded = match candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            for warning in &warnings {
                warn!("{}", warning);
            }
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => LoadedConfig::default(),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(PROJECT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("canonsort").join("config.toml"));
    }
    paths
}

/// Apply environment variable overrides (CANONSORT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// `with_env_overrides` with an injectable lookup
pub fn with_env_overrides_from<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(root) = get_env("CANONSORT_ROOT").filter(|v| !v.is_empty()) {
        config.corpus.root = Some(PathBuf::from(root));
    }

    if let Some(canons) = get_env("CANONSORT_CANONS").filter(|v| !v.is_empty()) {
        config.corpus.canons = Some(PathBuf::from(canons));
    }

    if let Some(output) = get_env("CANONSORT_OUTPUT").filter(|v| !v.is_empty()) {
        config.report.output = PathBuf::from(output);
    }

    if let Some(cap) = get_env("CANONSORT_SAMPLE_CAP") {
        match cap.trim().parse::<usize>() {
            Ok(cap) => config.report.sample_cap = cap,
            Err(_) => warn!(value = %cap, "ignoring CANONSORT_SAMPLE_CAP: not a number"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "corpus",
        "root",
        "canons",
        "extension",
        "report",
        "output",
        "sample_cap",
        "group_cap",
        "detail_cap",
        "top",
        "provenance",
        "error_preview",
        "layout",
        "period_threshold",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b.len()]
}
