//! Scenario: Asking Sweepy about the data
//!
//! Journey: After recording two months of electricity use and funding an
//! initiative, the analyst asks plain-language questions.

use crate::common::*;

use sweep::application::AssistantUseCase;
use sweep::domain::ports::NoopEventSink;
use sweep::domain::services::{IntentKind, ResolverOptions};
use sweep::domain::value_objects::ChartType;

fn assistant() -> AssistantUseCase<NoopEventSink> {
    AssistantUseCase::new(ResolverOptions::default(), NoopEventSink)
}

#[test]
fn scenario_total_emissions_with_monthly_trend() {
    let mut dashboard = seeded_dashboard();
    dashboard
        .record_measurement(measurement("m1", 80.0, date(2025, 1, 31)))
        .unwrap();
    dashboard
        .record_measurement(measurement("m2", 20.0, date(2025, 2, 28)))
        .unwrap();

    let answer = assistant().ask(dashboard.store(), "What are my total emissions?");

    assert_eq!(answer.intent, IntentKind::TotalEmissions);
    assert_eq!(
        answer.summary,
        "Your total emissions are 50.0 tCO2e across 1 track. \
         The latest month (2025-02) came in at 10.0 tCO2e."
    );
    assert_eq!(answer.chart_type, Some(ChartType::Sparkline));
    insta::assert_debug_snapshot!(answer.chart_data, @r#"
    [
        ChartPoint {
            name: "2025-01",
            value: 40.0,
        },
        ChartPoint {
            name: "2025-02",
            value: 10.0,
        },
    ]
    "#);
}

#[test]
fn scenario_initiative_question_beats_target_question() {
    let mut dashboard = seeded_dashboard();
    dashboard
        .add_targets_to_initiative("led-retrofit", &["grid-cut"])
        .unwrap();

    let answer = assistant().ask(
        dashboard.store(),
        "Which initiative does the most for my target?",
    );

    assert_eq!(answer.intent, IntentKind::InitiativeImpact);
    assert!(answer.chart_type.is_some());
}

#[test]
fn scenario_unknown_question_falls_back_to_dashboard() {
    let dashboard = seeded_dashboard();

    let answer = assistant().ask(dashboard.store(), "Will it rain tomorrow?");

    assert!(answer.is_fallback());
    assert_eq!(answer.chart_type, None);
    assert!(answer.chart_data.is_empty());
    assert_eq!(answer.link_url, "/dashboard");
}
