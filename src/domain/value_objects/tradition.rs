//! Tradition value object - Buddhist lineage labels

use serde::{Deserialize, Serialize};

/// Buddhist philosophical or practice lineage
///
/// Variant order is the keyword table order; derived `Ord` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tradition {
    #[serde(rename = "Chan/Zen")]
    ChanZen,
    #[serde(rename = "Pure Land")]
    PureLand,
    Tiantai,
    Huayan,
    Vinaya,
    Madhyamaka,
    Yogacara,
    Esoteric,
    #[serde(rename = "Pure Precepts")]
    PurePrecepts,
    #[serde(rename = "Pali/Theravada")]
    PaliTheravada,
    Tibetan,
    Commentarial,
    Historical,
    Liturgical,
    /// Sentinel for documents matching no keyword
    #[serde(rename = "General/Unspecified")]
    Unspecified,
}

impl Tradition {
    /// Get the report label
    pub fn label(&self) -> &'static str {
        match self {
            Tradition::ChanZen => "Chan/Zen",
            Tradition::PureLand => "Pure Land",
            Tradition::Tiantai => "Tiantai",
            Tradition::Huayan => "Huayan",
            Tradition::Vinaya => "Vinaya",
            Tradition::Madhyamaka => "Madhyamaka",
            Tradition::Yogacara => "Yogacara",
            Tradition::Esoteric => "Esoteric",
            Tradition::PurePrecepts => "Pure Precepts",
            Tradition::PaliTheravada => "Pali/Theravada",
            Tradition::Tibetan => "Tibetan",
            Tradition::Commentarial => "Commentarial",
            Tradition::Historical => "Historical",
            Tradition::Liturgical => "Liturgical",
            Tradition::Unspecified => "General/Unspecified",
        }
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, Tradition::Unspecified)
    }
}

impl std::fmt::Display for Tradition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
