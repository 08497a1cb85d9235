//! Measure command - record activity against a factor

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use sweep::application::NewMeasurement;
use sweep::domain::entities::EntityStore;
use sweep::domain::value_objects::EntityKind;

use super::{emit_json, Session};

pub struct MeasureArgs {
    pub track: String,
    pub factor: String,
    pub quantity: f64,
    pub supplier: Option<String>,
    pub date: Option<NaiveDate>,
    pub id: Option<String>,
}

pub fn cmd_measure(session: &Session, args: MeasureArgs) -> Result<()> {
    let mut dashboard = session.load_dashboard(session.events())?;

    let id = args
        .id
        .unwrap_or_else(|| next_measurement_id(dashboard.store()));
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());

    let mut input =
        NewMeasurement::new(id, args.factor, args.quantity, date).with_track(args.track);
    if let Some(supplier) = args.supplier {
        input = input.with_supplier(supplier);
    }

    let measurement = dashboard.record_measurement(input)?;
    dashboard.persist_derived()?;
    let track_total = dashboard
        .store()
        .track(&measurement.track_id)
        .map(|t| t.total_emissions)
        .unwrap_or_default();

    if session.ui.json {
        emit_json(&serde_json::json!({
            "event": "complete",
            "command": "measure",
            "id": measurement.id,
            "track": measurement.track_id,
            "calculated_value": measurement.calculated_value,
            "track_total": track_total,
        }));
        return Ok(());
    }

    println!(
        "{} Recorded {}: {} {} = {:.1} tCO2e ({} total {:.1} tCO2e)",
        session.ui.success_icon(),
        measurement.id,
        measurement.quantity,
        measurement.unit,
        measurement.calculated_value,
        measurement.track_id,
        track_total
    );
    Ok(())
}

/// First free id of the form `m-<n>`
fn next_measurement_id(store: &EntityStore) -> String {
    let mut n = store.count(EntityKind::Measurement) + 1;
    loop {
        let id = format!("m-{n}");
        if !store.contains(EntityKind::Measurement, &id) {
            return id;
        }
        n += 1;
    }
}
