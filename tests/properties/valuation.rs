//! Property tests for initiative valuation.

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use sweep::domain::entities::{Initiative, Target};
use sweep::domain::services::{compute_absolute_impact, FirstPercentExtractor};

fn target(i: usize, baseline: f64) -> Target {
    let day = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
    Target::new(format!("t{i}"), "t", "electricity", baseline, 0.0, day)
}

fn initiative(plan: String, links: &[String]) -> Initiative {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    Initiative::new("i", "i", now)
        .with_plan(plan)
        .with_targets(links.iter().cloned())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Impact never goes negative for non-negative targets.
    #[test]
    fn property_impact_is_non_negative(
        baselines in proptest::collection::vec(0.0f64..1e6, 0..6),
        plan in any::<String>(),
    ) {
        let targets: Vec<Target> = baselines.iter().enumerate().map(|(i, b)| target(i, *b)).collect();
        let links: Vec<String> = targets.iter().map(|t| t.id.clone()).collect();

        let absolute = compute_absolute_impact(
            &initiative(plan, &links),
            &targets,
            &FirstPercentExtractor::default(),
        );
        prop_assert!(absolute >= 0.0);
    }

    /// PROPERTY: Impact only counts linked targets.
    #[test]
    fn property_unlinked_targets_do_not_count(
        linked in 0.0f64..1e6,
        unlinked in 0.0f64..1e6,
        pct in 0u32..=100,
    ) {
        let targets = vec![target(0, linked), target(1, unlinked)];
        let alone = compute_absolute_impact(
            &initiative(format!("cut {pct}%"), &["t0".to_string()]),
            &targets[..1],
            &FirstPercentExtractor::default(),
        );
        let with_other = compute_absolute_impact(
            &initiative(format!("cut {pct}%"), &["t0".to_string()]),
            &targets,
            &FirstPercentExtractor::default(),
        );
        prop_assert_eq!(alone.to_bits(), with_other.to_bits());
    }

    /// PROPERTY: Linking nothing is worth nothing.
    #[test]
    fn property_no_links_is_zero(baseline in 0.0f64..1e6, pct in 0u32..=100) {
        let absolute = compute_absolute_impact(
            &initiative(format!("cut {pct}%"), &[]),
            &[target(0, baseline)],
            &FirstPercentExtractor::default(),
        );
        prop_assert_eq!(absolute, 0.0);
    }
}
