//! Contributor group value object - coarse digitization provenance buckets

use serde::{Deserialize, Serialize};

/// Description used when `<projectDesc>` has no usable paragraphs
pub const NO_PROJECT_DESCRIPTION: &str = "No project description found";

/// Description used when a document has no `<projectDesc>` element
pub const NO_PROJECT_DESC_TAG: &str = "No projectDesc tag found";

/// Who digitized or transcribed a document, bucketed from its project description
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContributorGroup {
    #[serde(rename = "CBETA Direct Input")]
    CbetaDirectInput,
    #[serde(rename = "CBETA OCR Processing")]
    CbetaOcr,
    #[serde(rename = "Christian Wittern Contributions")]
    ChristianWittern,
    #[serde(rename = "Tripitaka Koreana Related")]
    TripitakaKoreana,
    #[serde(rename = "Punctuation Provided")]
    PunctuationProvided,
    #[serde(rename = "OCR Processing")]
    Ocr,
    #[serde(rename = "Text Provided by Contributors")]
    TextProvided,
    Other,
}

impl ContributorGroup {
    pub fn label(&self) -> &'static str {
        match self {
            ContributorGroup::CbetaDirectInput => "CBETA Direct Input",
            ContributorGroup::CbetaOcr => "CBETA OCR Processing",
            ContributorGroup::ChristianWittern => "Christian Wittern Contributions",
            ContributorGroup::TripitakaKoreana => "Tripitaka Koreana Related",
            ContributorGroup::PunctuationProvided => "Punctuation Provided",
            ContributorGroup::Ocr => "OCR Processing",
            ContributorGroup::TextProvided => "Text Provided by Contributors",
            ContributorGroup::Other => "Other",
        }
    }
}

impl std::fmt::Display for ContributorGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// True for the two descriptions that stand in for missing provenance
pub fn is_missing_description(description: &str) -> bool {
    description == NO_PROJECT_DESCRIPTION || description == NO_PROJECT_DESC_TAG
}
