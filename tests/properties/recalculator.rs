//! Property tests for derived track totals and target values.

use chrono::NaiveDate;
use proptest::prelude::*;

use sweep::domain::entities::{Factor, Measurement, Target, Track};
use sweep::domain::services::{
    recalculate_targets, recalculate_tracks, recompute_target_values, recompute_track_totals,
};

const TRACKS: [&str; 3] = ["electricity", "travel", "heating"];

fn tracks() -> Vec<Track> {
    TRACKS.iter().map(|id| Track::new(*id, *id)).collect()
}

fn measurements() -> impl Strategy<Value = Vec<Measurement>> {
    let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    proptest::collection::vec((0usize..4, 0.0f64..10_000.0, 0.0f64..5.0), 0..24).prop_map(
        move |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (track, quantity, rate))| {
                    // index 3 points at a track that does not exist
                    let track_id = TRACKS.get(track).copied().unwrap_or("orphan");
                    let factor = Factor::new(format!("f{i}"), "factor", track_id, "unit", rate);
                    Measurement::record(format!("m{i}"), &factor, quantity, day)
                })
                .collect()
        },
    )
}

fn targets() -> impl Strategy<Value = Vec<Target>> {
    let day = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
    proptest::collection::vec((0.0f64..1e6, -50.0f64..150.0, any::<f64>()), 0..8).prop_map(
        move |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (baseline, pct, stale))| {
                    let mut target = Target::new(format!("t{i}"), "t", "electricity", baseline, pct, day);
                    target.target_value = stale;
                    target
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Track totals partition the measurements of known tracks.
    #[test]
    fn property_totals_sum_their_measurements(ms in measurements()) {
        let updated = recompute_track_totals(&tracks(), &ms);

        prop_assert_eq!(updated.len(), TRACKS.len());
        for track in &updated {
            let expected: f64 = ms
                .iter()
                .filter(|m| m.track_id == track.id)
                .map(|m| m.calculated_value)
                .sum();
            prop_assert!((track.total_emissions - expected).abs() <= 1e-6 * expected.max(1.0));
        }
    }

    /// PROPERTY: Recomputing from a fresh result reports no change.
    #[test]
    fn property_track_recalculation_is_idempotent(ms in measurements()) {
        let first = recompute_track_totals(&tracks(), &ms);
        prop_assert!(!recalculate_tracks(&first, &ms).is_changed());
    }

    /// PROPERTY: Target values follow baseline * (1 - pct / 100) and settle.
    #[test]
    fn property_target_values_follow_formula(ts in targets()) {
        let updated = recompute_target_values(&ts);

        for (before, after) in ts.iter().zip(&updated) {
            prop_assert_eq!(&before.id, &after.id);
            let expected = before.baseline_value * (1.0 - before.target_percentage / 100.0);
            prop_assert_eq!(after.target_value.to_bits(), expected.to_bits());
        }
        prop_assert!(!recalculate_targets(&updated).is_changed());
    }
}
