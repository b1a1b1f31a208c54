//! JSON canon registry
//!
//! Reads the corpus `canons.json`: an object keyed by canon code whose values
//! are either a display name or an object with `title-zh` / `title-en`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::{CanonEntry, CanonRegistry};
use crate::error::{CanonsortError, CanonsortResult};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCanon {
    Name(String),
    Titles {
        #[serde(rename = "title-zh", default)]
        title_zh: Option<String>,
        #[serde(rename = "title-en", default)]
        title_en: Option<String>,
    },
}

impl RawCanon {
    fn display_name(self, code: &str) -> String {
        let name = match self {
            RawCanon::Name(name) => Some(name),
            RawCanon::Titles { title_zh, title_en } => title_zh
                .filter(|t| !t.trim().is_empty())
                .or(title_en.filter(|t| !t.trim().is_empty())),
        };
        name.map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| code.to_string())
    }
}

/// Load the canon registry from a JSON reference file
///
/// A missing or malformed file is a configuration error.
pub fn load_canon_registry(path: &Path) -> CanonsortResult<CanonRegistry> {
    let content = fs::read_to_string(path).map_err(|e| CanonsortError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_canon_registry(&content, path)
}

/// Parse registry JSON; `path` is only used for error messages
pub fn parse_canon_registry(content: &str, path: &Path) -> CanonsortResult<CanonRegistry> {
    let raw: BTreeMap<String, RawCanon> =
        serde_json::from_str(content).map_err(|e| CanonsortError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(CanonRegistry::from_entries(raw.into_iter().map(
        |(code, canon)| {
            let display_name = canon.display_name(&code);
            CanonEntry::new(code, display_name)
        },
    )))
}
