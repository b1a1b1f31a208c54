//! Origin value object - geographic origin labels

use serde::{Deserialize, Serialize};

/// Geographic origin of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Origin {
    India,
    #[serde(rename = "Central Asia")]
    CentralAsia,
    China,
    Korea,
    Japan,
    #[serde(rename = "Southeast Asia")]
    SoutheastAsia,
    #[serde(rename = "Unknown Origin")]
    Unknown,
}

impl Origin {
    pub fn label(&self) -> &'static str {
        match self {
            Origin::India => "India",
            Origin::CentralAsia => "Central Asia",
            Origin::China => "China",
            Origin::Korea => "Korea",
            Origin::Japan => "Japan",
            Origin::SoutheastAsia => "Southeast Asia",
            Origin::Unknown => "Unknown Origin",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
