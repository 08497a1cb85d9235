//! Scenario: Planning an initiative against a reduction target
//!
//! Journey: An analyst records electricity use, sets a 30% reduction target
//! on a 1000 tCO2e baseline, and links an LED retrofit planned to "Reduce
//! usage by 20%".
//!
//! Success Criteria:
//! - Track totals follow the measurements
//! - The initiative is worth 20% of the linked target value
//! - Editing or unlinking the target revalues the initiative

use crate::common::*;

use sweep::domain::entities::Target;

#[test]
fn scenario_link_target_then_tighten_it() {
    let mut dashboard = seeded_dashboard();

    // Measurements feed the track total
    dashboard
        .record_measurement(measurement("m1", 60.0, date(2025, 1, 31)))
        .unwrap();
    dashboard
        .record_measurement(measurement("m2", 20.0, date(2025, 2, 28)))
        .unwrap();
    assert_eq!(dashboard.store().track("electricity").unwrap().total_emissions, 40.0);

    // 1000 * (1 - 30 / 100) = 700
    assert_eq!(dashboard.store().target("grid-cut").unwrap().target_value, 700.0);

    // 700 * 20% = 140
    let linked = dashboard
        .add_targets_to_initiative("led-retrofit", &["grid-cut"])
        .unwrap();
    assert_eq!(linked.absolute, 140.0);

    // Target tightened to 50%: 1000 * 0.5 = 500, initiative 500 * 20% = 100
    let tightened = Target {
        target_percentage: 50.0,
        ..dashboard.store().target("grid-cut").unwrap().clone()
    };
    dashboard.update_target(tightened).unwrap();
    assert_eq!(dashboard.store().target("grid-cut").unwrap().target_value, 500.0);
    assert_eq!(dashboard.store().initiative("led-retrofit").unwrap().absolute, 100.0);

    // Unlinking drops the initiative back to zero
    let unlinked = dashboard
        .remove_target_from_initiative("led-retrofit", "grid-cut")
        .unwrap();
    assert_eq!(unlinked.absolute, 0.0);
    assert!(unlinked.target_ids.is_empty());
}

#[test]
fn scenario_removing_history_lowers_totals() {
    let mut dashboard = seeded_dashboard();
    dashboard
        .record_measurement(measurement("m1", 60.0, date(2025, 1, 31)))
        .unwrap();
    dashboard
        .record_measurement(measurement("m2", 20.0, date(2025, 2, 28)))
        .unwrap();

    dashboard.delete_measurement("m1").unwrap();

    assert_eq!(dashboard.store().track("electricity").unwrap().total_emissions, 10.0);
    assert_eq!(dashboard.store().measurements().len(), 1);
}

#[test]
fn scenario_deleting_target_unlinks_initiatives() {
    let mut dashboard = seeded_dashboard();
    dashboard
        .add_targets_to_initiative("led-retrofit", &["grid-cut"])
        .unwrap();

    dashboard.delete_target("grid-cut").unwrap();

    let initiative = dashboard.store().initiative("led-retrofit").unwrap();
    assert!(initiative.target_ids.is_empty());
    assert_eq!(initiative.absolute, 0.0);
}
