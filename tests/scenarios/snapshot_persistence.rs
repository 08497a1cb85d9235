//! Scenario: Working against the JSON snapshot across sessions
//!
//! Journey: A session edits the store through a snapshot-backed dashboard,
//! a second session reloads it, and a hand-edited snapshot with stale
//! derived values gets repaired.

use std::fs;

use crate::common::*;

use sweep::application::Dashboard;
use sweep::domain::entities::Target;
use sweep::domain::ports::{NoopEventSink, RepositoryError};
use sweep::infrastructure::JsonSnapshotRepository;
use sweep::SweepError;

fn snapshot_dashboard(path: &std::path::Path) -> Dashboard<JsonSnapshotRepository, NoopEventSink> {
    Dashboard::new(JsonSnapshotRepository::new(path), NoopEventSink).with_clock(fixed_now)
}

#[test]
fn scenario_edits_survive_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".sweep/snapshot.json");

    let mut first = snapshot_dashboard(&path);
    first.load().unwrap();
    seed(&mut first);
    first
        .record_measurement(measurement("m1", 80.0, date(2025, 1, 31)))
        .unwrap();
    first
        .add_targets_to_initiative("led-retrofit", &["grid-cut"])
        .unwrap();

    let mut second = snapshot_dashboard(&path);
    second.load().unwrap();

    assert_eq!(second.store(), first.store());
    assert_eq!(second.store().initiative("led-retrofit").unwrap().absolute, 140.0);

    // Recording a measurement writes the measurement, not the track total
    let pending = second.pending_derived().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id(), "electricity");
    assert_eq!(second.persist_derived().unwrap(), 1);
    assert!(second.pending_derived().unwrap().is_empty());
}

#[test]
fn scenario_target_edit_leaves_initiative_pending_until_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");

    let mut dashboard = snapshot_dashboard(&path);
    dashboard.load().unwrap();
    seed(&mut dashboard);
    dashboard
        .add_targets_to_initiative("led-retrofit", &["grid-cut"])
        .unwrap();

    let tightened = Target {
        target_percentage: 50.0,
        ..dashboard.store().target("grid-cut").unwrap().clone()
    };
    dashboard.update_target(tightened).unwrap();

    // The target write carries its own value; the revalued initiative does not
    let pending = dashboard.pending_derived().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id(), "led-retrofit");

    assert_eq!(dashboard.persist_derived().unwrap(), 1);
    assert!(dashboard.pending_derived().unwrap().is_empty());

    let mut reloaded = snapshot_dashboard(&path);
    reloaded.load().unwrap();
    assert_eq!(reloaded.store().initiative("led-retrofit").unwrap().absolute, 100.0);
}

#[test]
fn scenario_hand_edited_snapshot_is_repaired_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(
        &path,
        r#"{
  "version": 1,
  "tracks": [
    { "id": "electricity", "name": "Electricity", "total_emissions": 999.0 }
  ],
  "factors": [
    { "id": "grid-kwh", "name": "Grid", "track_id": "electricity", "unit": "kWh", "rate": 0.5 }
  ],
  "measurements": [
    {
      "id": "m1",
      "track_id": "electricity",
      "factor_id": "grid-kwh",
      "date": "2025-01-31",
      "quantity": 80.0,
      "unit": "kWh",
      "calculated_value": 40.0
    }
  ],
  "targets": [
    {
      "id": "grid-cut",
      "name": "Cut grid electricity",
      "track_id": "electricity",
      "baseline_value": 1000.0,
      "target_percentage": 30.0,
      "target_date": "2030-12-31"
    }
  ],
  "initiatives": [
    {
      "id": "led-retrofit",
      "name": "LED retrofit",
      "target_ids": ["grid-cut"],
      "plan": "Reduce usage by 20%",
      "created_at": "2025-01-01T00:00:00Z",
      "updated_at": "2025-01-01T00:00:00Z"
    }
  ]
}
"#,
    )
    .unwrap();

    let mut dashboard = snapshot_dashboard(&path);
    dashboard.load().unwrap();

    let store = dashboard.store();
    assert_eq!(store.track("electricity").unwrap().total_emissions, 40.0);
    assert_eq!(store.target("grid-cut").unwrap().target_value, 700.0);
    assert_eq!(store.initiative("led-retrofit").unwrap().absolute, 140.0);

    assert_eq!(dashboard.pending_derived().unwrap().len(), 3);
    assert_eq!(dashboard.persist_derived().unwrap(), 3);

    let mut reloaded = snapshot_dashboard(&path);
    reloaded.load().unwrap();
    assert!(reloaded.pending_derived().unwrap().is_empty());
    assert_eq!(reloaded.store(), dashboard.store());
}

#[test]
fn scenario_future_snapshot_version_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(&path, r#"{ "version": 999 }"#).unwrap();

    let mut dashboard = snapshot_dashboard(&path);
    let err = dashboard.load().unwrap_err();

    assert!(matches!(
        err,
        SweepError::Repository(RepositoryError::VersionMismatch {
            found: 999,
            expected: 1
        })
    ));
    assert!(dashboard.store().is_empty());
}

#[test]
fn scenario_nan_quantity_keeps_the_snapshot_readable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");

    let mut dashboard = snapshot_dashboard(&path);
    dashboard.load().unwrap();
    seed(&mut dashboard);
    dashboard
        .record_measurement(measurement("m1", 10.0, date(2025, 1, 31)))
        .unwrap();

    for quantity in [f64::NAN, f64::INFINITY] {
        let err = dashboard
            .record_measurement(measurement("m2", quantity, date(2025, 2, 28)))
            .unwrap_err();
        assert!(matches!(err, SweepError::NonFinite { .. }));
    }

    let mut reloaded = snapshot_dashboard(&path);
    reloaded.load().unwrap();
    assert_eq!(reloaded.store().measurements().len(), 1);
    assert_eq!(reloaded.store().tracks()[0].total_emissions, 5.0);
}
