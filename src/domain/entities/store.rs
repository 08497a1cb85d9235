//! EntityStore - the in-memory collections behind the dashboard
//!
//! The store is plain data owned by the state holder. Every collection is
//! read through an accessor and replaced wholesale through its mutator; the
//! store itself never recomputes anything.

use serde::{Deserialize, Serialize};

use super::{Factor, Initiative, Measurement, Scenario, Supplier, Target, Track};
use crate::domain::value_objects::EntityKind;

/// All seven entity collections
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityStore {
    tracks: Vec<Track>,
    factors: Vec<Factor>,
    measurements: Vec<Measurement>,
    targets: Vec<Target>,
    initiatives: Vec<Initiative>,
    scenarios: Vec<Scenario>,
    suppliers: Vec<Supplier>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Accessors ---

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn initiatives(&self) -> &[Initiative] {
        &self.initiatives
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    // --- Mutators (wholesale replacement) ---

    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
    }

    pub fn set_factors(&mut self, factors: Vec<Factor>) {
        self.factors = factors;
    }

    pub fn set_measurements(&mut self, measurements: Vec<Measurement>) {
        self.measurements = measurements;
    }

    pub fn set_targets(&mut self, targets: Vec<Target>) {
        self.targets = targets;
    }

    pub fn set_initiatives(&mut self, initiatives: Vec<Initiative>) {
        self.initiatives = initiatives;
    }

    pub fn set_scenarios(&mut self, scenarios: Vec<Scenario>) {
        self.scenarios = scenarios;
    }

    pub fn set_suppliers(&mut self, suppliers: Vec<Supplier>) {
        self.suppliers = suppliers;
    }

    // --- Lookups ---

    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn factor(&self, id: &str) -> Option<&Factor> {
        self.factors.iter().find(|f| f.id == id)
    }

    pub fn target(&self, id: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn initiative(&self, id: &str) -> Option<&Initiative> {
        self.initiatives.iter().find(|i| i.id == id)
    }

    /// Returns true if a record of `kind` with `id` is present
    pub fn contains(&self, kind: EntityKind, id: &str) -> bool {
        match kind {
            EntityKind::Track => self.tracks.iter().any(|r| r.id == id),
            EntityKind::Factor => self.factors.iter().any(|r| r.id == id),
            EntityKind::Measurement => self.measurements.iter().any(|r| r.id == id),
            EntityKind::Target => self.targets.iter().any(|r| r.id == id),
            EntityKind::Initiative => self.initiatives.iter().any(|r| r.id == id),
            EntityKind::Scenario => self.scenarios.iter().any(|r| r.id == id),
            EntityKind::Supplier => self.suppliers.iter().any(|r| r.id == id),
        }
    }

    /// Number of records in the collection for `kind`
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Track => self.tracks.len(),
            EntityKind::Factor => self.factors.len(),
            EntityKind::Measurement => self.measurements.len(),
            EntityKind::Target => self.targets.len(),
            EntityKind::Initiative => self.initiatives.len(),
            EntityKind::Scenario => self.scenarios.len(),
            EntityKind::Supplier => self.suppliers.len(),
        }
    }

    /// Targets grouped under a scenario, in store order
    pub fn scenario_targets<'a>(&'a self, scenario_id: &'a str) -> impl Iterator<Item = &'a Target> {
        self.targets
            .iter()
            .filter(move |t| t.scenario_id.as_deref() == Some(scenario_id))
    }

    pub fn is_empty(&self) -> bool {
        EntityKind::ALL.iter().all(|kind| self.count(*kind) == 0)
    }
}
