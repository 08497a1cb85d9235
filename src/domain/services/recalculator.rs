//! Derived metrics recalculation
//!
//! Pure functions that recompute the derived fields of the store:
//! - `Track::total_emissions` from the measurement collection
//! - `Target::target_value` from baseline and percentage
//!
//! Recomputation always produces a fresh list in the same order. The
//! `recalculate_*` variants additionally compare the result against the
//! current list and only hand back a replacement when a derived value
//! actually moved, so a reactive owner never loops on its own writes.

use crate::domain::entities::{Initiative, Measurement, Target, Track};

/// A record with one derived numeric field
pub trait Derived {
    fn derived_value(&self) -> f64;
}

impl Derived for Track {
    fn derived_value(&self) -> f64 {
        self.total_emissions
    }
}

impl Derived for Target {
    fn derived_value(&self) -> f64 {
        self.target_value
    }
}

impl Derived for Initiative {
    fn derived_value(&self) -> f64 {
        self.absolute
    }
}

/// Outcome of a compare-before-commit recalculation
#[derive(Debug, Clone, PartialEq)]
pub enum Recalculation<T> {
    /// Derived values already match; nothing to commit
    Unchanged,
    /// Replacement list to commit
    Changed(Vec<T>),
}

impl<T: Derived> Recalculation<T> {
    /// Compare `next` against `current` by derived value
    ///
    /// Values are compared bit-for-bit so NaN never reads as a change on
    /// every pass.
    pub fn compare(current: &[T], next: Vec<T>) -> Self {
        let same = current.len() == next.len()
            && current
                .iter()
                .zip(&next)
                .all(|(a, b)| a.derived_value().to_bits() == b.derived_value().to_bits());
        if same {
            Recalculation::Unchanged
        } else {
            Recalculation::Changed(next)
        }
    }
}

impl<T> Recalculation<T> {
    pub fn is_changed(&self) -> bool {
        matches!(self, Recalculation::Changed(_))
    }

    pub fn into_changed(self) -> Option<Vec<T>> {
        match self {
            Recalculation::Changed(list) => Some(list),
            Recalculation::Unchanged => None,
        }
    }
}

/// Sum of `calculated_value` for the measurements of one track
///
/// Non-finite values contribute nothing.
pub fn track_total(track_id: &str, measurements: &[Measurement]) -> f64 {
    measurements
        .iter()
        .filter(|m| m.track_id == track_id)
        .map(|m| m.calculated_value)
        .filter(|v| v.is_finite())
        .sum()
}

/// Tracks with `total_emissions` recomputed from `measurements`
pub fn recompute_track_totals(tracks: &[Track], measurements: &[Measurement]) -> Vec<Track> {
    tracks
        .iter()
        .map(|track| Track {
            total_emissions: track_total(&track.id, measurements),
            ..track.clone()
        })
        .collect()
}

/// Targets with `target_value` recomputed from baseline and percentage
pub fn recompute_target_values(targets: &[Target]) -> Vec<Target> {
    targets
        .iter()
        .map(|target| Target {
            target_value: target.expected_value(),
            ..target.clone()
        })
        .collect()
}

/// Recompute track totals and compare against the current list
pub fn recalculate_tracks(tracks: &[Track], measurements: &[Measurement]) -> Recalculation<Track> {
    Recalculation::compare(tracks, recompute_track_totals(tracks, measurements))
}

/// Recompute target values and compare against the current list
pub fn recalculate_targets(targets: &[Target]) -> Recalculation<Target> {
    Recalculation::compare(targets, recompute_target_values(targets))
}
