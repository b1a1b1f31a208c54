#![no_main]

use std::path::Path;

use canonsort::infrastructure::extractor::extract_from_str;
use canonsort::{classify, CanonRegistry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Extraction and classification should never panic
        let registry = CanonRegistry::new();
        if let Ok(doc) = extract_from_str(content, Path::new("T/T01/T01n0001.xml"), &registry) {
            let _ = classify(&doc);
        }
    }
});
