//! Period value object - historical era labels

use serde::{Deserialize, Serialize};

/// Historical period of a text's composition or translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "Pre-Tang")]
    PreTang,
    Tang,
    Song,
    Yuan,
    Ming,
    Qing,
    Modern,
    Contemporary,
    /// Monastic author plus a dynasty mention, but no table match
    #[serde(rename = "Traditional Chinese Buddhism")]
    TraditionalChinese,
    #[serde(rename = "Unknown Period")]
    Unknown,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::PreTang => "Pre-Tang",
            Period::Tang => "Tang",
            Period::Song => "Song",
            Period::Yuan => "Yuan",
            Period::Ming => "Ming",
            Period::Qing => "Qing",
            Period::Modern => "Modern",
            Period::Contemporary => "Contemporary",
            Period::TraditionalChinese => "Traditional Chinese Buddhism",
            Period::Unknown => "Unknown Period",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
