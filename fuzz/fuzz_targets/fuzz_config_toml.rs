#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz TOML config parsing - this should never panic
        let _ = toml::from_str::<canonsort::Config>(content);
        let _ = canonsort::config::parse_with_warnings(content, Path::new("canonsort.toml"));
    }
});
