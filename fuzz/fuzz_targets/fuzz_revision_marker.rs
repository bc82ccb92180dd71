#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Some(revision) = revship::Revision::from_marker(data) {
        let _ = revision.short();
        assert_eq!(
            revship::Revision::from_marker(&revision.to_marker()),
            Some(revision)
        );
    }
});
