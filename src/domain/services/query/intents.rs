//! Intent table and handlers
//!
//! `RULES` is evaluated top to bottom and the first matching predicate wins.
//! Keep specific intents above general ones: a question mentioning both
//! "initiative" and "target" belongs to the initiative intents, and "supplier
//! emissions" belongs to suppliers rather than to total emissions.
//!
//! Keywords are matched against whole words, so "resources" is not a source
//! and "factory" is not a factor.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use super::{QueryAnswer, QuerySnapshot, ResolverOptions};
use crate::domain::value_objects::{ChartPoint, ChartType, TargetStatus};

const UNIT: &str = "tCO2e";

/// Which question the resolver decided it was answering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    InitiativeSpend,
    InitiativeImpact,
    TargetProgress,
    TopSupplier,
    EmissionFactors,
    TrackBreakdown,
    TotalEmissions,
    Fallback,
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IntentKind::InitiativeSpend => "initiative spend",
            IntentKind::InitiativeImpact => "initiative impact",
            IntentKind::TargetProgress => "target progress",
            IntentKind::TopSupplier => "top supplier",
            IntentKind::EmissionFactors => "emission factors",
            IntentKind::TrackBreakdown => "emissions by track",
            IntentKind::TotalEmissions => "total emissions",
            IntentKind::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// A handler could not produce a trustworthy answer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntentError {
    #[error("{0} is not a finite number")]
    NonFinite(&'static str),
}

type Handler = fn(&QuerySnapshot<'_>, &ResolverOptions) -> Result<QueryAnswer, IntentError>;

pub(super) struct IntentRule {
    pub kind: IntentKind,
    pub matches: fn(&str) -> bool,
    pub handle: Handler,
}

/// Evaluation order of the intent table
pub const INTENT_ORDER: [IntentKind; 7] = [
    IntentKind::InitiativeSpend,
    IntentKind::InitiativeImpact,
    IntentKind::TargetProgress,
    IntentKind::TopSupplier,
    IntentKind::EmissionFactors,
    IntentKind::TrackBreakdown,
    IntentKind::TotalEmissions,
];

pub(super) static RULES: [IntentRule; 7] = [
    IntentRule {
        kind: IntentKind::InitiativeSpend,
        matches: |q| {
            mentions(q, &["initiative", "project", "programme", "program"])
                && mentions(q, &["spend*", "spent", "cost", "budget", "invest*", "money"])
        },
        handle: initiative_spend,
    },
    IntentRule {
        kind: IntentKind::InitiativeImpact,
        matches: |q| mentions(q, &["initiative"]),
        handle: initiative_impact,
    },
    IntentRule {
        kind: IntentKind::TargetProgress,
        matches: |q| mentions(q, &["target", "goal"]),
        handle: target_progress,
    },
    IntentRule {
        kind: IntentKind::TopSupplier,
        matches: |q| mentions(q, &["supplier", "vendor"]),
        handle: top_supplier,
    },
    IntentRule {
        kind: IntentKind::EmissionFactors,
        matches: |q| mentions(q, &["factor"]),
        handle: emission_factors,
    },
    IntentRule {
        kind: IntentKind::TrackBreakdown,
        matches: |q| mentions_tracks(q) || mentions(q, &["categor*", "breakdown", "source"]),
        handle: track_breakdown,
    },
    IntentRule {
        kind: IntentKind::TotalEmissions,
        matches: |q| mentions(q, &["emission", "footprint", "co2*", "carbon", "total"]),
        handle: total_emissions,
    },
];

/// First rule whose predicate accepts the lowercased question
pub(super) fn classify(normalized: &str) -> Option<&'static IntentRule> {
    RULES.iter().find(|rule| (rule.matches)(normalized))
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
}

/// Exact word or its plural; a trailing `*` makes the keyword a stem
fn keyword_matches(word: &str, keyword: &str) -> bool {
    match keyword.strip_suffix('*') {
        Some(stem) => word.starts_with(stem),
        None => word == keyword || word.strip_suffix('s') == Some(keyword),
    }
}

fn mentions(text: &str, keywords: &[&str]) -> bool {
    words(text).any(|word| keywords.iter().any(|keyword| keyword_matches(word, keyword)))
}

/// "on track" and "off track" describe progress, not the per-track breakdown
fn mentions_tracks(text: &str) -> bool {
    let tokens: Vec<&str> = words(text).collect();
    tokens.iter().enumerate().any(|(i, word)| {
        keyword_matches(word, "track") && !(i > 0 && matches!(tokens[i - 1], "on" | "off"))
    })
}

fn finite(value: f64, what: &'static str) -> Result<f64, IntentError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IntentError::NonFinite(what))
    }
}

/// Largest first, ties broken by name, at most `top_n` entries
fn ranked(mut points: Vec<ChartPoint>, top_n: usize) -> Vec<ChartPoint> {
    points.sort_by(|a, b| b.value.total_cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    points.truncate(top_n.max(1));
    points
}

fn share(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

fn answer(
    kind: IntentKind,
    summary: String,
    chart_type: ChartType,
    chart_data: Vec<ChartPoint>,
    link_text: &str,
    link_url: &str,
) -> QueryAnswer {
    QueryAnswer {
        intent: kind,
        summary,
        chart_type: Some(chart_type),
        chart_data,
        link_text: link_text.to_string(),
        link_url: link_url.to_string(),
    }
}

fn initiative_spend(
    snapshot: &QuerySnapshot<'_>,
    options: &ResolverOptions,
) -> Result<QueryAnswer, IntentError> {
    let kind = IntentKind::InitiativeSpend;
    let initiatives = snapshot.initiatives;
    if initiatives.is_empty() {
        return Ok(answer(
            kind,
            "You haven't created any initiatives yet.".to_string(),
            ChartType::Bar,
            Vec::new(),
            "Create an initiative",
            "/initiatives",
        ));
    }

    let total = finite(initiatives.iter().map(|i| i.spend).sum(), "initiative spend")?;
    let data = ranked(
        initiatives
            .iter()
            .map(|i| ChartPoint::new(i.name.clone(), i.spend))
            .collect(),
        options.top_n,
    );

    let mut summary = format!(
        "You are spending {:.2} across {} initiative{}.",
        total,
        initiatives.len(),
        plural(initiatives.len())
    );
    if let Some(top) = data.first() {
        summary.push_str(&format!(
            " {} has the largest budget at {:.2}.",
            top.name, top.value
        ));
    }

    Ok(answer(
        kind,
        summary,
        ChartType::Bar,
        data,
        "View initiatives",
        "/initiatives",
    ))
}

fn initiative_impact(
    snapshot: &QuerySnapshot<'_>,
    options: &ResolverOptions,
) -> Result<QueryAnswer, IntentError> {
    let kind = IntentKind::InitiativeImpact;
    let initiatives = snapshot.initiatives;
    if initiatives.is_empty() {
        return Ok(answer(
            kind,
            "You haven't created any initiatives yet.".to_string(),
            ChartType::Bar,
            Vec::new(),
            "Create an initiative",
            "/initiatives",
        ));
    }

    let total = finite(
        initiatives.iter().map(|i| i.absolute).sum(),
        "initiative impact",
    )?;
    let data = ranked(
        initiatives
            .iter()
            .map(|i| ChartPoint::new(i.name.clone(), i.absolute))
            .collect(),
        options.top_n,
    );

    let mut summary = format!(
        "Your {} initiative{} are expected to avoid {:.1} {}.",
        initiatives.len(),
        plural(initiatives.len()),
        total,
        UNIT
    );
    if let Some(top) = data.first() {
        summary.push_str(&format!(
            " {} has the biggest impact at {:.1} {}.",
            top.name, top.value, UNIT
        ));
    }

    Ok(answer(
        kind,
        summary,
        ChartType::Bar,
        data,
        "View initiatives",
        "/initiatives",
    ))
}

fn target_progress(
    snapshot: &QuerySnapshot<'_>,
    _options: &ResolverOptions,
) -> Result<QueryAnswer, IntentError> {
    let kind = IntentKind::TargetProgress;
    let targets = snapshot.targets;
    if targets.is_empty() {
        return Ok(answer(
            kind,
            "You haven't set any targets yet.".to_string(),
            ChartType::Donut,
            Vec::new(),
            "Set a target",
            "/targets",
        ));
    }

    let progress_sum: f64 = targets
        .iter()
        .map(|target| {
            let current = snapshot
                .tracks
                .iter()
                .find(|t| t.id == target.track_id)
                .map(|t| t.total_emissions)
                .unwrap_or(target.baseline_value);
            target.progress(current)
        })
        .sum();
    let average = finite(progress_sum / targets.len() as f64, "target progress")?;

    let data: Vec<ChartPoint> = TargetStatus::ALL
        .iter()
        .map(|status| {
            let count = targets.iter().filter(|t| t.status == *status).count();
            ChartPoint::new(status.label(), count as f64)
        })
        .filter(|point| point.value > 0.0)
        .collect();

    let breakdown = data
        .iter()
        .map(|p| format!("{} {}", p.value as usize, p.name.to_lowercase()))
        .collect::<Vec<_>>()
        .join(", ");

    let summary = format!(
        "You have {} target{} ({}). Average progress toward target is {:.0}%.",
        targets.len(),
        plural(targets.len()),
        breakdown,
        average
    );

    Ok(answer(
        kind,
        summary,
        ChartType::Donut,
        data,
        "View targets",
        "/targets",
    ))
}

fn top_supplier(
    snapshot: &QuerySnapshot<'_>,
    options: &ResolverOptions,
) -> Result<QueryAnswer, IntentError> {
    let kind = IntentKind::TopSupplier;

    let mut by_supplier: BTreeMap<&str, f64> = BTreeMap::new();
    for m in snapshot.measurements {
        if let Some(supplier_id) = m.supplier_id.as_deref() {
            *by_supplier.entry(supplier_id).or_insert(0.0) += m.calculated_value;
        }
    }

    if by_supplier.is_empty() {
        return Ok(answer(
            kind,
            "None of your measurements are linked to a supplier yet.".to_string(),
            ChartType::Bar,
            Vec::new(),
            "View suppliers",
            "/suppliers",
        ));
    }

    let total = finite(by_supplier.values().sum(), "supplier emissions")?;
    let data = ranked(
        by_supplier
            .into_iter()
            .map(|(id, value)| {
                let name = snapshot
                    .suppliers
                    .iter()
                    .find(|s| s.id == id)
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| id.to_string());
                ChartPoint::new(name, value)
            })
            .collect(),
        options.top_n,
    );

    let summary = match data.first() {
        Some(top) => format!(
            "{} is your top supplier with {:.1} {} ({:.0}% of supplier emissions).",
            top.name,
            top.value,
            UNIT,
            share(top.value, total)
        ),
        None => format!("Your suppliers account for {:.1} {}.", total, UNIT),
    };

    Ok(answer(
        kind,
        summary,
        ChartType::Bar,
        data,
        "View suppliers",
        "/suppliers",
    ))
}

fn emission_factors(
    snapshot: &QuerySnapshot<'_>,
    options: &ResolverOptions,
) -> Result<QueryAnswer, IntentError> {
    let kind = IntentKind::EmissionFactors;
    let factors = snapshot.factors;
    if factors.is_empty() {
        return Ok(answer(
            kind,
            "No emission factors have been added yet.".to_string(),
            ChartType::Bar,
            Vec::new(),
            "Add a factor",
            "/factors",
        ));
    }

    let mut by_track: BTreeMap<&str, usize> = BTreeMap::new();
    for factor in factors {
        *by_track.entry(factor.track_id.as_str()).or_insert(0) += 1;
    }
    let track_count = by_track.len();

    let data = ranked(
        by_track
            .into_iter()
            .map(|(track_id, count)| {
                let name = snapshot
                    .tracks
                    .iter()
                    .find(|t| t.id == track_id)
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| track_id.to_string());
                ChartPoint::new(name, count as f64)
            })
            .collect(),
        options.top_n,
    );

    let summary = format!(
        "You have {} emission factor{} across {} track{}.",
        factors.len(),
        plural(factors.len()),
        track_count,
        plural(track_count)
    );

    Ok(answer(
        kind,
        summary,
        ChartType::Bar,
        data,
        "View factors",
        "/factors",
    ))
}

fn track_breakdown(
    snapshot: &QuerySnapshot<'_>,
    options: &ResolverOptions,
) -> Result<QueryAnswer, IntentError> {
    let kind = IntentKind::TrackBreakdown;
    let tracks = snapshot.tracks;
    if tracks.is_empty() {
        return Ok(answer(
            kind,
            "You haven't created any tracks yet.".to_string(),
            ChartType::Donut,
            Vec::new(),
            "Create a track",
            "/tracks",
        ));
    }

    let total = finite(tracks.iter().map(|t| t.total_emissions).sum(), "track emissions")?;
    let data = ranked(
        tracks
            .iter()
            .map(|t| ChartPoint::new(t.label(), t.total_emissions))
            .collect(),
        options.top_n,
    );

    let summary = match data.first() {
        Some(top) if total > 0.0 => format!(
            "{} is your largest source at {:.1} {} ({:.0}% of {:.1} {}).",
            top.name,
            top.value,
            UNIT,
            share(top.value, total),
            total,
            UNIT
        ),
        _ => format!(
            "No emissions have been recorded yet across your {} track{}.",
            tracks.len(),
            plural(tracks.len())
        ),
    };

    Ok(answer(
        kind,
        summary,
        ChartType::Donut,
        data,
        "View tracks",
        "/tracks",
    ))
}

fn total_emissions(
    snapshot: &QuerySnapshot<'_>,
    options: &ResolverOptions,
) -> Result<QueryAnswer, IntentError> {
    let kind = IntentKind::TotalEmissions;
    let total = finite(
        snapshot.tracks.iter().map(|t| t.total_emissions).sum(),
        "total emissions",
    )?;

    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
    for m in snapshot.measurements {
        *by_month.entry(m.month_key()).or_insert(0.0) += m.calculated_value;
    }
    let mut data = Vec::with_capacity(by_month.len());
    for (month, value) in by_month {
        data.push(ChartPoint::new(month, finite(value, "monthly emissions")?));
    }

    let mut summary = format!(
        "Your total emissions are {:.1} {} across {} track{}.",
        total,
        UNIT,
        snapshot.tracks.len(),
        plural(snapshot.tracks.len())
    );
    if data.len() > 1 {
        if let Some(latest) = data.last() {
            summary.push_str(&format!(
                " The latest month ({}) came in at {:.1} {}.",
                latest.name, latest.value, UNIT
            ));
        }
    }

    Ok(QueryAnswer {
        intent: kind,
        summary,
        chart_type: Some(ChartType::Sparkline),
        chart_data: data,
        link_text: "Open dashboard".to_string(),
        link_url: options.dashboard_url.clone(),
    })
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
