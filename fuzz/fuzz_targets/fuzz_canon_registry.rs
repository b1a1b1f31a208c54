#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz canons.json parsing - this should never panic
        let _ = canonsort::infrastructure::registry::parse_canon_registry(
            content,
            Path::new("canons.json"),
        );
    }
});
