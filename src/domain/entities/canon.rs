//! Canon registry - canon code to display name

use std::collections::BTreeMap;

/// One named collection of texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonEntry {
    pub code: String,
    pub display_name: String,
}

impl CanonEntry {
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }
}

/// Immutable mapping from canon code to entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonRegistry {
    entries: BTreeMap<String, CanonEntry>,
}

impl CanonRegistry {
    /// Empty registry; canon codes then come only from document ids
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = CanonEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.code.clone(), entry))
                .collect(),
        }
    }

    pub fn get(&self, code: &str) -> Option<&CanonEntry> {
        self.entries.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Display name, falling back to the code itself
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code)
            .map(|entry| entry.display_name.as_str())
            .unwrap_or(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_code() {
        let registry = CanonRegistry::from_entries([CanonEntry::new("T", "大正新脩大藏經")]);
        assert_eq!(registry.display_name("T"), "大正新脩大藏經");
        assert_eq!(registry.display_name("ZZ"), "ZZ");
        assert_eq!(registry.get("T").map(|e| e.code.as_str()), Some("T"));
        assert!(registry.get("ZZ").is_none());
    }

    #[test]
    fn contains_known_codes_only() {
        let registry = CanonRegistry::from_entries([
            CanonEntry::new("T", "Taishō"),
            CanonEntry::new("X", "卍續藏"),
        ]);
        assert!(registry.contains("X"));
        assert!(!registry.contains("J"));
        assert_eq!(registry.len(), 2);
        assert!(CanonRegistry::new().is_empty());
    }
}
