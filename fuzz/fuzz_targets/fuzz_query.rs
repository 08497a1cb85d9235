#![no_main]

use libfuzzer_sys::fuzz_target;
use sweep::domain::entities::EntityStore;
use sweep::domain::services::{resolve_query, QuerySnapshot};

fuzz_target!(|data: &[u8]| {
    if let Ok(question) = std::str::from_utf8(data) {
        let store = EntityStore::new();
        let answer = resolve_query(question, &QuerySnapshot::from_store(&store));
        assert!(!answer.summary.is_empty());
    }
});
