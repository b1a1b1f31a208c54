//! Provenance classifier - buckets project descriptions by contributor

use crate::domain::value_objects::ContributorGroup;

/// Bucket a flattened `<projectDesc>` into a contributor group
///
/// Rules are checked in order; the first hit wins.
pub fn classify_provenance(description: &str) -> ContributorGroup {
    if description.contains("CBETA") && description.contains("Input by CBETA") {
        ContributorGroup::CbetaDirectInput
    } else if description.contains("CBETA OCR Group") {
        ContributorGroup::CbetaOcr
    } else if description.contains("Christian Wittern") {
        ContributorGroup::ChristianWittern
    } else if description.contains("Tripitaka Koreana") {
        ContributorGroup::TripitakaKoreana
    } else if description.contains("Punctuated text as provided by") {
        ContributorGroup::PunctuationProvided
    } else if description.contains("OCR") {
        ContributorGroup::Ocr
    } else if description.contains("Text as provided by") {
        ContributorGroup::TextProvided
    } else {
        ContributorGroup::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cbeta_input_wins_over_ocr() {
        assert_eq!(
            classify_provenance("Input by CBETA | OCR corrections by volunteers"),
            ContributorGroup::CbetaDirectInput
        );
    }

    #[test]
    fn ocr_group_before_generic_ocr() {
        assert_eq!(
            classify_provenance("Proofread by CBETA OCR Group"),
            ContributorGroup::CbetaOcr
        );
        assert_eq!(
            classify_provenance("OCR by Tripitaka Koreana Research Institute"),
            ContributorGroup::TripitakaKoreana
        );
        assert_eq!(classify_provenance("OCR by volunteers"), ContributorGroup::Ocr);
    }

    #[test]
    fn punctuation_before_plain_text_provided() {
        assert_eq!(
            classify_provenance("Punctuated text as provided by Dharma Drum"),
            ContributorGroup::PunctuationProvided
        );
        assert_eq!(
            classify_provenance("Text as provided by Mr. Chen"),
            ContributorGroup::TextProvided
        );
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(
            classify_provenance("No projectDesc tag found"),
            ContributorGroup::Other
        );
        assert_eq!(
            classify_provenance("Christian Wittern"),
            ContributorGroup::ChristianWittern
        );
    }
}
