//! Property tests for the query intent resolver.

use chrono::NaiveDate;
use proptest::prelude::*;

use sweep::domain::entities::{EntityStore, Factor, Measurement, Supplier, Track};
use sweep::domain::services::{resolve_query, IntentKind, QueryResolver, QuerySnapshot};

fn store() -> EntityStore {
    let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let factor = Factor::new("grid", "Grid", "electricity", "kWh", 0.5);
    let mut track = Track::new("electricity", "Electricity");
    track.total_emissions = 50.0;

    let mut store = EntityStore::new();
    store.set_tracks(vec![track]);
    store.set_factors(vec![factor.clone()]);
    store.set_measurements(vec![
        Measurement::record("m1", &factor, 100.0, day).with_supplier("acme")
    ]);
    store.set_suppliers(vec![Supplier::new("acme", "Acme")]);
    store
}

fn question() -> impl Strategy<Value = String> {
    let words = prop_oneof![
        Just("initiative"),
        Just("spend"),
        Just("target"),
        Just("supplier"),
        Just("factor"),
        Just("track"),
        Just("total"),
        Just("emissions"),
        Just("what"),
        Just("the"),
        Just("weather"),
        Just("?"),
    ];
    proptest::collection::vec(words, 0..6).prop_map(|w| w.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any text resolves to an answer, empty store or not.
    #[test]
    fn property_resolve_never_panics(text in any::<String>()) {
        let empty = EntityStore::new();
        let _ = resolve_query(&text, &QuerySnapshot::from_store(&empty));

        let store = store();
        let answer = resolve_query(&text, &QuerySnapshot::from_store(&store));
        prop_assert!(!answer.summary.is_empty());
        prop_assert!(!answer.link_url.is_empty());
    }

    /// PROPERTY: Only the fallback answer has no chart.
    #[test]
    fn property_fallback_has_no_chart(text in question()) {
        let store = store();
        let answer = resolve_query(&text, &QuerySnapshot::from_store(&store));
        prop_assert_eq!(answer.chart_type.is_none(), answer.is_fallback());
    }

    /// PROPERTY: Mentioning an initiative always lands on an initiative intent.
    #[test]
    fn property_initiative_wins(before in question(), after in question()) {
        let text = format!("{before} initiative {after}");
        let kind = QueryResolver::default().classify(&text);
        prop_assert!(
            matches!(kind, IntentKind::InitiativeSpend | IntentKind::InitiativeImpact),
            "{} classified as {:?}", text, kind
        );
    }

    /// PROPERTY: Classification ignores case and surrounding whitespace.
    #[test]
    fn property_classification_is_case_insensitive(text in question()) {
        let resolver = QueryResolver::default();
        let shouted = format!("  {}  ", text.to_uppercase());
        prop_assert_eq!(resolver.classify(&text), resolver.classify(&shouted));
    }
}
