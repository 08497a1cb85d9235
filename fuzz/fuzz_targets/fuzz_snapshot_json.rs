#![no_main]

use libfuzzer_sys::fuzz_target;
use sweep::EntityStore;

fuzz_target!(|data: &[u8]| {
    // Snapshot bodies come from disk and may be hand-edited
    let _ = serde_json::from_slice::<EntityStore>(data);
});
