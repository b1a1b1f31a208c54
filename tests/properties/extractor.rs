//! Property tests for TEI extraction.

use std::path::Path;

use proptest::prelude::*;

use canonsort::infrastructure::extractor::{canon_from_id, display_path, extract_from_str};
use canonsort::CanonRegistry;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: extraction never panics on arbitrary input; it either
    /// yields metadata or an error.
    #[test]
    fn property_extract_never_panics(content in "(?s).{0,512}") {
        let _ = extract_from_str(&content, Path::new("T/a.xml"), &CanonRegistry::new());
    }

    /// PROPERTY: the canon code is exactly the leading uppercase run of the id.
    #[test]
    fn property_canon_from_id_prefix(code in "[A-Z]{1,3}", rest in "[0-9][0-9a-z_]{0,10}") {
        let id = format!("{code}{rest}");
        prop_assert_eq!(canon_from_id(&id), Some(code));
    }

    /// PROPERTY: display paths use `/` and keep every segment.
    #[test]
    fn property_display_path_joins_segments(
        segments in proptest::collection::vec("[A-Za-z0-9_]{1,8}", 1..5)
    ) {
        let path: std::path::PathBuf = segments.iter().collect();
        prop_assert_eq!(display_path(&path), segments.join("/"));
    }
}
