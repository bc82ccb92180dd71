#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing (including unknown-key warnings) should never panic
        let _ = toml::from_str::<revship::Config>(content);
        let _ = revship::config::parse_with_warnings(content, Path::new("revship.toml"));
    }
});
