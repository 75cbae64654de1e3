#![no_main]

use libfuzzer_sys::fuzz_target;

use paddock::infrastructure::StoreSnapshot;

fuzz_target!(|data: &[u8]| {
    // Decoding an arbitrary store file should never panic
    if let Ok(snapshot) = serde_json::from_slice::<StoreSnapshot>(data) {
        let _ = serde_json::to_string(&snapshot);
    }
});
