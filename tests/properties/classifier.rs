//! Property tests for keyword classification.

use proptest::prelude::*;

use canonsort::domain::services::{
    classify_geographic, classify_period, classify_tradition, ORIGIN_TABLE, PERIOD_TABLE,
    TRADITION_TABLE,
};
use canonsort::{Period, Tradition};

/// Text that never contains a CJK character, so no keyword can match
fn ascii_noise() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-y0-9 .,;-]{0,64}")
        .unwrap()
        .prop_filter("must not contain ascii keywords", |s| {
            !["chan", "zen", "tibetan"].iter().any(|k| s.contains(k))
        })
}

fn any_text() -> impl Strategy<Value = String> {
    "(?s).{0,128}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the tradition list is never empty and never mixes the
    /// sentinel with real labels.
    #[test]
    fn property_traditions_never_empty(text in any_text()) {
        let traditions = classify_tradition(&text);
        prop_assert!(!traditions.is_empty());
        if traditions.contains(&Tradition::Unspecified) {
            prop_assert_eq!(traditions, vec![Tradition::Unspecified]);
        }
    }

    /// PROPERTY: traditions come back in table order without duplicates.
    #[test]
    fn property_traditions_in_table_order(text in any_text()) {
        let traditions = classify_tradition(&text);
        prop_assert!(traditions.windows(2).all(|w| w[0] < w[1]));
    }

    /// PROPERTY: keyword-free text is unspecified, unknown period, unknown origin.
    #[test]
    fn property_noise_yields_sentinels(author in ascii_noise(), source in ascii_noise()) {
        prop_assert_eq!(classify_tradition(&format!("{author} {source}")), vec![Tradition::Unspecified]);
        prop_assert_eq!(classify_period(&author, &source, &[]), Period::Unknown);
        prop_assert_eq!(classify_geographic(&author, &source, &[]), canonsort::Origin::Unknown);
    }

    /// PROPERTY: any tradition keyword embedded in noise is found.
    #[test]
    fn property_tradition_keyword_detected(
        entry in 0..TRADITION_TABLE.len(),
        prefix in ascii_noise(),
        suffix in ascii_noise(),
    ) {
        let (label, keywords) = TRADITION_TABLE[entry];
        let text = format!("{prefix}{}{suffix}", keywords[0]);
        prop_assert!(classify_tradition(&text).contains(&label));
    }

    /// PROPERTY: with two period keywords present, the earlier table entry wins.
    #[test]
    fn property_period_earlier_entry_wins(
        a in 0..PERIOD_TABLE.len(),
        b in 0..PERIOD_TABLE.len(),
    ) {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let author = format!("{} {}", PERIOD_TABLE[second].1[0], PERIOD_TABLE[first].1[0]);
        prop_assert_eq!(classify_period(&author, "", &[]), PERIOD_TABLE[first].0);
    }

    /// PROPERTY: with two origin keywords present, the earlier table entry wins.
    #[test]
    fn property_origin_earlier_entry_wins(
        a in 0..ORIGIN_TABLE.len(),
        b in 0..ORIGIN_TABLE.len(),
    ) {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let titles = vec![ORIGIN_TABLE[second].1[0].to_string()];
        let result = classify_geographic("", ORIGIN_TABLE[first].1[0], &titles);
        prop_assert_eq!(result, ORIGIN_TABLE[first].0);
    }
}
