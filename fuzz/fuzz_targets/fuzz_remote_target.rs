#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(spec) = std::str::from_utf8(data) {
        if let Ok(target) = revship::RemoteTarget::parse(spec) {
            // Opening only builds the store; nothing touches the network
            let _ = target.open().describe();
        }
    }
});
