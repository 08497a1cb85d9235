//! Property tests for plan percentage extraction.

use proptest::prelude::*;

use sweep::domain::services::{extract_percentage, FirstPercentExtractor, PercentageExtractor};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Extraction never panics, whatever the plan text.
    #[test]
    fn property_extract_never_panics(plan in any::<String>()) {
        let _ = extract_percentage(&plan);
        let _ = FirstPercentExtractor::default().extract(&plan);
    }

    /// PROPERTY: A whole number followed by `%` is found inside prose.
    #[test]
    fn property_whole_percent_is_found(
        n in 0u32..10_000,
        prefix in "[A-Za-z ]{0,20}",
        suffix in "[A-Za-z ]{0,20}",
    ) {
        let plan = format!("{prefix} {n}% {suffix}");
        prop_assert_eq!(extract_percentage(&plan), Some(f64::from(n)));
    }

    /// PROPERTY: The first marked number wins over later ones.
    #[test]
    fn property_first_percent_wins(a in 0u32..1000, b in 0u32..1000) {
        let plan = format!("cut {a}% now and {b}% later");
        prop_assert_eq!(extract_percentage(&plan), Some(f64::from(a)));
    }

    /// PROPERTY: Text with no digits yields the extractor's default.
    #[test]
    fn property_no_digits_uses_default(plan in "[^0-9]{0,40}", default in 0.0f64..100.0) {
        prop_assert_eq!(extract_percentage(&plan), None);
        prop_assert_eq!(FirstPercentExtractor::new(default).extract(&plan), default);
    }
}
