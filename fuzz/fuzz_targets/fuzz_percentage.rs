#![no_main]

use libfuzzer_sys::fuzz_target;
use sweep::domain::services::extract_percentage;

fuzz_target!(|data: &[u8]| {
    if let Ok(plan) = std::str::from_utf8(data) {
        // Any finite result is fine; panics and NaN are not
        if let Some(value) = extract_percentage(plan) {
            assert!(value.is_finite());
        }
    }
});
