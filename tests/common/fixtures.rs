//! Reusable store fixtures.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use sweep::application::{Dashboard, NewMeasurement};
use sweep::domain::entities::{Factor, Initiative, Target, Track};
use sweep::domain::ports::{EntityRepository, NoopEventSink};
use sweep::infrastructure::InMemoryRepository;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
}

/// One track, one factor (rate 0.5), one 1000 @ 30% target and an
/// unlinked "Reduce usage by 20%" initiative
pub fn seed<R: EntityRepository>(dashboard: &mut Dashboard<R, NoopEventSink>) {
    dashboard
        .create_track(Track::new("electricity", "Electricity"))
        .unwrap();
    dashboard
        .create_factor(Factor::new(
            "grid-kwh",
            "Grid electricity",
            "electricity",
            "kWh",
            0.5,
        ))
        .unwrap();
    dashboard
        .create_target(Target::new(
            "grid-cut",
            "Cut grid electricity",
            "electricity",
            1000.0,
            30.0,
            date(2030, 12, 31),
        ))
        .unwrap();
    dashboard
        .create_initiative(
            Initiative::new("led-retrofit", "LED retrofit", fixed_now())
                .with_plan("Reduce usage by 20%"),
        )
        .unwrap();
}

/// Seeded dashboard over an in-memory repository
pub fn seeded_dashboard() -> Dashboard<InMemoryRepository, NoopEventSink> {
    let mut dashboard =
        Dashboard::new(InMemoryRepository::new(), NoopEventSink).with_clock(fixed_now);
    seed(&mut dashboard);
    dashboard
}

pub fn measurement(id: &str, quantity: f64, day: NaiveDate) -> NewMeasurement {
    NewMeasurement::new(id, "grid-kwh", quantity, day)
}
