//! Initiative valuation
//!
//! An initiative's `absolute` impact is the sum, over its linked targets, of
//! `target_value * |percentage(plan)| / 100`. The percentage comes from an
//! injected `PercentageExtractor` so plan parsing can be swapped or stubbed.

use super::percentage::PercentageExtractor;
use super::recalculator::Recalculation;
use crate::domain::entities::{Initiative, Target};

/// Absolute impact of one initiative against the current target list
///
/// Returns 0 when nothing is linked, and 0 when the plan carries no usable
/// percentage. Non-finite target values contribute nothing.
pub fn compute_absolute_impact<E>(initiative: &Initiative, targets: &[Target], extractor: &E) -> f64
where
    E: PercentageExtractor + ?Sized,
{
    let linked: Vec<&Target> = targets
        .iter()
        .filter(|t| initiative.target_ids.contains(&t.id))
        .collect();
    if linked.is_empty() {
        return 0.0;
    }

    let percentage = extractor.extract(&initiative.plan);
    if !percentage.is_finite() {
        return 0.0;
    }
    let share = percentage.abs() / 100.0;

    linked
        .iter()
        .map(|t| t.target_value)
        .filter(|v| v.is_finite())
        .map(|v| v * share)
        .sum()
}

/// Initiatives with `absolute` recomputed, order preserved
pub fn revalue_initiatives<E>(
    initiatives: &[Initiative],
    targets: &[Target],
    extractor: &E,
) -> Vec<Initiative>
where
    E: PercentageExtractor + ?Sized,
{
    initiatives
        .iter()
        .map(|initiative| Initiative {
            absolute: compute_absolute_impact(initiative, targets, extractor),
            ..initiative.clone()
        })
        .collect()
}

/// Revalue all initiatives and compare against the current list
pub fn recalculate_initiatives<E>(
    initiatives: &[Initiative],
    targets: &[Target],
    extractor: &E,
) -> Recalculation<Initiative>
where
    E: PercentageExtractor + ?Sized,
{
    Recalculation::compare(initiatives, revalue_initiatives(initiatives, targets, extractor))
}
