//! Init command - write a demo snapshot
//!
//! The demo store is built through the dashboard so every derived value is
//! computed the same way a real edit would compute it.

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use sweep::application::{Dashboard, NewMeasurement};
use sweep::domain::entities::{EntityStore, Factor, Initiative, Scenario, Supplier, Target, Track};
use sweep::domain::ports::NoopEventSink;
use sweep::domain::value_objects::{InitiativeStatus, TargetStatus};
use sweep::infrastructure::{InMemoryRepository, JsonSnapshotRepository};

use super::{emit_json, Session};

pub fn cmd_init(session: &Session, force: bool) -> Result<()> {
    let repo = JsonSnapshotRepository::new(&session.snapshot);
    if repo.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            session.snapshot.display()
        );
    }

    let store = demo_store()?;
    repo.save(&store)
        .with_context(|| format!("failed to write {}", session.snapshot.display()))?;

    if session.ui.json {
        emit_json(&serde_json::json!({
            "event": "complete",
            "command": "init",
            "snapshot": session.snapshot.display().to_string(),
            "tracks": store.tracks().len(),
            "measurements": store.measurements().len(),
            "targets": store.targets().len(),
            "initiatives": store.initiatives().len(),
        }));
        return Ok(());
    }

    println!(
        "{} Wrote demo data to {}",
        session.ui.success_icon(),
        session.snapshot.display()
    );
    println!("  Try: sweep ask \"what are my total emissions?\"");
    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("invalid date {year}-{month}-{day}"))
}

/// Three tracks, a quarter of measurements, two targets and two initiatives
pub fn demo_store() -> Result<EntityStore> {
    let mut dashboard = Dashboard::new(InMemoryRepository::new(), NoopEventSink);
    let now = Utc::now();

    for track in [
        Track::new("electricity", "Electricity").with_emoji("⚡"),
        Track::new("travel", "Business travel").with_emoji("✈"),
        Track::new("heating", "Heating").with_emoji("🔥"),
    ] {
        dashboard.create_track(track)?;
    }

    for factor in [
        Factor::new("grid-kwh", "Grid electricity", "electricity", "kWh", 0.5),
        Factor::new("flight-km", "Short-haul flight", "travel", "km", 0.2),
        Factor::new("gas-m3", "Natural gas", "heating", "m3", 2.0),
    ] {
        dashboard.create_factor(factor)?;
    }

    for supplier in [
        Supplier::new("acme-power", "Acme Power"),
        Supplier::new("blue-grid", "Blue Grid"),
        Supplier::new("skyways", "SkyWays"),
    ] {
        dashboard.create_supplier(supplier)?;
    }

    let measurements = [
        ("m-1", "grid-kwh", 40.0, date(2025, 1, 31)?, Some("acme-power")),
        ("m-2", "grid-kwh", 30.0, date(2025, 2, 28)?, Some("blue-grid")),
        ("m-3", "grid-kwh", 10.0, date(2025, 3, 31)?, Some("acme-power")),
        ("m-4", "flight-km", 100.0, date(2025, 1, 15)?, Some("skyways")),
        ("m-5", "flight-km", 50.0, date(2025, 3, 12)?, Some("skyways")),
        ("m-6", "gas-m3", 5.0, date(2025, 2, 10)?, None),
    ];
    for (id, factor, quantity, day, supplier) in measurements {
        let mut input = NewMeasurement::new(id, factor, quantity, day);
        if let Some(supplier) = supplier {
            input = input.with_supplier(supplier);
        }
        dashboard.record_measurement(input)?;
    }

    dashboard.create_scenario(Scenario::new("net-zero-2030", "Net zero 2030"))?;
    dashboard.create_target(
        Target::new(
            "grid-cut",
            "Cut grid electricity",
            "electricity",
            1000.0,
            30.0,
            date(2030, 12, 31)?,
        )
        .with_scenario("net-zero-2030"),
    )?;
    dashboard.create_target(
        Target::new(
            "travel-half",
            "Halve business travel",
            "travel",
            400.0,
            50.0,
            date(2028, 12, 31)?,
        )
        .with_status(TargetStatus::AtRisk),
    )?;

    dashboard.create_initiative(
        Initiative::new("led-retrofit", "LED retrofit", now)
            .with_plan("Reduce usage by 20% across all sites")
            .with_spend(12000.0)
            .with_status(InitiativeStatus::InProgress)
            .with_targets(["grid-cut"]),
    )?;
    dashboard.create_initiative(
        Initiative::new("rail-first", "Rail first", now)
            .with_plan("Swap short flights for rail, cutting 25 % of trips")
            .with_spend(3000.0)
            .with_targets(["travel-half"]),
    )?;

    Ok(dashboard.store().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_totals() {
        let store = demo_store().unwrap();

        let totals: Vec<(&str, f64)> = store
            .tracks()
            .iter()
            .map(|t| (t.id.as_str(), t.total_emissions))
            .collect();
        assert_eq!(
            totals,
            vec![("electricity", 40.0), ("travel", 30.0), ("heating", 10.0)]
        );
        assert_eq!(store.initiative("led-retrofit").unwrap().absolute, 140.0);
        assert_eq!(store.initiative("rail-first").unwrap().absolute, 50.0);
    }
}
