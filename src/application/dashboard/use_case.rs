//! Dashboard use case - the owner of the entity store
//!
//! Every mutating operation follows the same sequence:
//! 1. validate against the current store
//! 2. build the record with its derived fields already computed
//! 3. hand it to the repository
//! 4. commit to the store only if the repository accepted it
//! 5. recompute dependent collections, replacing them only when a derived
//!    value actually changed

use chrono::{DateTime, Utc};

use super::input::NewMeasurement;
use crate::domain::entities::{
    EntityStore, Factor, Initiative, Measurement, Scenario, Supplier, Target, Track,
};
use crate::domain::ports::{
    EntityRepository, PersistAction, Record, RepositoryResult, StoreEvent, StoreEventSink,
};
use crate::domain::services::{
    compute_absolute_impact, recalculate_initiatives, recalculate_targets, recalculate_tracks,
    track_total, FirstPercentExtractor, PercentageExtractor,
};
use crate::domain::value_objects::EntityKind;
use crate::error::{SweepError, SweepResult};

/// Source of "now" for `updated_at` stamps
pub type Clock = fn() -> DateTime<Utc>;

/// State owner for the dashboard
pub struct Dashboard<R, S>
where
    R: EntityRepository,
    S: StoreEventSink,
{
    repo: R,
    events: S,
    store: EntityStore,
    extractor: Box<dyn PercentageExtractor>,
    clock: Clock,
}

impl<R, S> Dashboard<R, S>
where
    R: EntityRepository,
    S: StoreEventSink,
{
    /// Create a dashboard with an empty store; call `load` to fetch data
    pub fn new(repo: R, events: S) -> Self {
        Self {
            repo,
            events,
            store: EntityStore::new(),
            extractor: Box::new(FirstPercentExtractor::default()),
            clock: Utc::now,
        }
    }

    /// Use a different plan percentage extractor
    pub fn with_extractor<E>(mut self, extractor: E) -> Self
    where
        E: PercentageExtractor + 'static,
    {
        self.extractor = Box::new(extractor);
        self
    }

    /// Use a fixed clock (tests, replays)
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn events(&self) -> &S {
        &self.events
    }

    /// Replace the store with the repository's contents and recompute
    pub fn load(&mut self) -> SweepResult<()> {
        let store = self.repo.fetch_all()?;
        let records = EntityKind::ALL.iter().map(|kind| store.count(*kind)).sum();
        self.store = store;
        self.events.on_event(StoreEvent::Loaded { records });
        self.recompute_all();
        Ok(())
    }

    /// Recompute every derived collection; returns true if anything moved
    pub fn recompute_all(&mut self) -> bool {
        let tracks = self.refresh_tracks();
        let targets = self.refresh_targets();
        let initiatives = self.refresh_initiatives();
        tracks || targets || initiatives
    }

    /// Records whose derived values differ from the repository's copy
    pub fn pending_derived(&self) -> SweepResult<Vec<Record>> {
        let stored = self.repo.fetch_all()?;
        let mut pending = Vec::new();

        for track in self.store.tracks() {
            if stored
                .track(&track.id)
                .is_some_and(|s| s.total_emissions.to_bits() != track.total_emissions.to_bits())
            {
                pending.push(Record::Track(track.clone()));
            }
        }
        for target in self.store.targets() {
            if stored
                .target(&target.id)
                .is_some_and(|s| s.target_value.to_bits() != target.target_value.to_bits())
            {
                pending.push(Record::Target(target.clone()));
            }
        }
        for initiative in self.store.initiatives() {
            if stored
                .initiative(&initiative.id)
                .is_some_and(|s| s.absolute.to_bits() != initiative.absolute.to_bits())
            {
                pending.push(Record::Initiative(initiative.clone()));
            }
        }

        Ok(pending)
    }

    /// Write derived values that differ from the repository's copy
    ///
    /// Returns the number of records updated.
    pub fn persist_derived(&self) -> SweepResult<usize> {
        let pending = self.pending_derived()?;
        for record in &pending {
            self.persist(PersistAction::Update, record)?;
        }
        Ok(pending.len())
    }

    // --- Tracks ---

    pub fn create_track(&mut self, track: Track) -> SweepResult<Track> {
        self.ensure_absent(EntityKind::Track, &track.id)?;
        let track = Track {
            total_emissions: track_total(&track.id, self.store.measurements()),
            ..track
        };
        self.persist(PersistAction::Create, &Record::Track(track.clone()))?;

        let mut tracks = self.store.tracks().to_vec();
        tracks.push(track.clone());
        self.store.set_tracks(tracks);
        self.refresh_tracks();
        Ok(track)
    }

    /// Delete a track with its measurements, targets and factors
    ///
    /// Each dependent is removed as the repository accepts it; a failure
    /// stops the cascade but derived values are still brought up to date.
    pub fn delete_track(&mut self, id: &str) -> SweepResult<()> {
        self.ensure_present(EntityKind::Track, id)?;
        let result = self.cascade_track(id);
        self.refresh_tracks();
        self.refresh_initiatives();
        result
    }

    fn cascade_track(&mut self, id: &str) -> SweepResult<()> {
        let measurement_ids: Vec<String> = self
            .store
            .measurements()
            .iter()
            .filter(|m| m.track_id == id)
            .map(|m| m.id.clone())
            .collect();
        for measurement_id in measurement_ids {
            self.persist_delete(EntityKind::Measurement, &measurement_id)?;
            self.remove_measurement(&measurement_id);
        }

        let target_ids: Vec<String> = self
            .store
            .targets()
            .iter()
            .filter(|t| t.track_id == id)
            .map(|t| t.id.clone())
            .collect();
        for target_id in target_ids {
            self.delete_target(&target_id)?;
        }

        let factor_ids: Vec<String> = self
            .store
            .factors()
            .iter()
            .filter(|f| f.track_id == id)
            .map(|f| f.id.clone())
            .collect();
        for factor_id in factor_ids {
            self.persist_delete(EntityKind::Factor, &factor_id)?;
            let factors = self
                .store
                .factors()
                .iter()
                .filter(|f| f.id != factor_id)
                .cloned()
                .collect();
            self.store.set_factors(factors);
        }

        self.persist_delete(EntityKind::Track, id)?;
        let tracks = self
            .store
            .tracks()
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        self.store.set_tracks(tracks);
        Ok(())
    }

    // --- Factors ---

    pub fn create_factor(&mut self, factor: Factor) -> SweepResult<()> {
        self.ensure_absent(EntityKind::Factor, &factor.id)?;
        self.ensure_present(EntityKind::Track, &factor.track_id)?;
        ensure_finite(EntityKind::Factor, &factor.id, &[("rate", factor.rate)])?;
        self.persist(PersistAction::Create, &Record::Factor(factor.clone()))?;

        let mut factors = self.store.factors().to_vec();
        factors.push(factor);
        self.store.set_factors(factors);
        Ok(())
    }

    // --- Measurements ---

    /// Record a measurement, computing its emissions from the factor rate
    pub fn record_measurement(&mut self, input: NewMeasurement) -> SweepResult<Measurement> {
        self.ensure_absent(EntityKind::Measurement, &input.id)?;
        let factor = self
            .store
            .factor(&input.factor_id)
            .cloned()
            .ok_or_else(|| SweepError::NotFound {
                kind: EntityKind::Factor,
                id: input.factor_id.clone(),
            })?;
        self.ensure_present(EntityKind::Track, &factor.track_id)?;
        if let Some(track_id) = &input.track_id {
            if *track_id != factor.track_id {
                return Err(SweepError::FactorTrackMismatch {
                    factor: factor.id,
                    factor_track: factor.track_id,
                    track: track_id.clone(),
                });
            }
        }
        if let Some(supplier_id) = &input.supplier_id {
            self.ensure_present(EntityKind::Supplier, supplier_id)?;
        }

        let mut measurement = Measurement::record(input.id, &factor, input.quantity, input.date);
        ensure_finite(
            EntityKind::Measurement,
            &measurement.id,
            &[
                ("quantity", measurement.quantity),
                ("calculated_value", measurement.calculated_value),
            ],
        )?;
        if let Some(supplier_id) = input.supplier_id {
            measurement = measurement.with_supplier(supplier_id);
        }
        self.persist(
            PersistAction::Create,
            &Record::Measurement(measurement.clone()),
        )?;

        let mut measurements = self.store.measurements().to_vec();
        measurements.push(measurement.clone());
        self.store.set_measurements(measurements);
        self.refresh_tracks();
        Ok(measurement)
    }

    pub fn delete_measurement(&mut self, id: &str) -> SweepResult<()> {
        self.ensure_present(EntityKind::Measurement, id)?;
        self.persist_delete(EntityKind::Measurement, id)?;
        self.remove_measurement(id);
        self.refresh_tracks();
        Ok(())
    }

    fn remove_measurement(&mut self, id: &str) {
        let measurements = self
            .store
            .measurements()
            .iter()
            .filter(|m| m.id != id)
            .cloned()
            .collect();
        self.store.set_measurements(measurements);
    }

    // --- Targets ---

    pub fn create_target(&mut self, target: Target) -> SweepResult<Target> {
        self.ensure_absent(EntityKind::Target, &target.id)?;
        self.validate_target(&target)?;
        let target = Target {
            target_value: target.expected_value(),
            ..target
        };
        self.persist(PersistAction::Create, &Record::Target(target.clone()))?;

        let mut targets = self.store.targets().to_vec();
        targets.push(target.clone());
        self.store.set_targets(targets);
        self.refresh_targets();
        self.refresh_initiatives();
        Ok(target)
    }

    /// Replace a target; its value and every linked initiative are recomputed
    pub fn update_target(&mut self, target: Target) -> SweepResult<Target> {
        self.ensure_present(EntityKind::Target, &target.id)?;
        self.validate_target(&target)?;
        let target = Target {
            target_value: target.expected_value(),
            ..target
        };
        self.persist(PersistAction::Update, &Record::Target(target.clone()))?;

        let targets = self
            .store
            .targets()
            .iter()
            .map(|t| if t.id == target.id { target.clone() } else { t.clone() })
            .collect();
        self.store.set_targets(targets);
        self.refresh_targets();
        self.refresh_initiatives();
        Ok(target)
    }

    /// Delete a target and unlink it from every initiative
    ///
    /// Every linked initiative is attempted even when one fails to save;
    /// the first failure is returned. An initiative that kept its link to
    /// the deleted target is still revalued without it.
    pub fn delete_target(&mut self, id: &str) -> SweepResult<()> {
        self.ensure_present(EntityKind::Target, id)?;
        self.persist_delete(EntityKind::Target, id)?;

        let targets = self
            .store
            .targets()
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        self.store.set_targets(targets);
        self.refresh_targets();

        let linked: Vec<Initiative> = self
            .store
            .initiatives()
            .iter()
            .filter(|i| i.is_linked_to(id))
            .cloned()
            .collect();
        let mut first_error = None;
        for mut initiative in linked {
            initiative.target_ids.remove(id);
            initiative.updated_at = (self.clock)();
            if let Err(err) = self.save_initiative(initiative, PersistAction::Update) {
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }

        self.refresh_initiatives();
        first_error.map_or(Ok(()), Err)
    }

    fn validate_target(&self, target: &Target) -> SweepResult<()> {
        ensure_finite(
            EntityKind::Target,
            &target.id,
            &[
                ("baseline_value", target.baseline_value),
                ("target_percentage", target.target_percentage),
            ],
        )?;
        self.ensure_present(EntityKind::Track, &target.track_id)?;
        if let Some(scenario_id) = &target.scenario_id {
            self.ensure_present(EntityKind::Scenario, scenario_id)?;
        }
        Ok(())
    }

    /// Targets grouped under a scenario
    pub fn scenario_targets<'a>(&'a self, scenario_id: &'a str) -> Vec<&'a Target> {
        self.store.scenario_targets(scenario_id).collect()
    }

    // --- Initiatives ---

    pub fn create_initiative(&mut self, initiative: Initiative) -> SweepResult<Initiative> {
        self.ensure_absent(EntityKind::Initiative, &initiative.id)?;
        ensure_finite(EntityKind::Initiative, &initiative.id, &[("spend", initiative.spend)])?;
        self.ensure_targets_exist(initiative.target_ids.iter())?;
        self.save_initiative(initiative, PersistAction::Create)
    }

    /// Replace an initiative; `created_at` is kept, `updated_at` is stamped
    pub fn update_initiative(&mut self, mut initiative: Initiative) -> SweepResult<Initiative> {
        let created_at = self
            .store
            .initiative(&initiative.id)
            .map(|existing| existing.created_at)
            .ok_or_else(|| SweepError::NotFound {
                kind: EntityKind::Initiative,
                id: initiative.id.clone(),
            })?;
        ensure_finite(EntityKind::Initiative, &initiative.id, &[("spend", initiative.spend)])?;
        self.ensure_targets_exist(initiative.target_ids.iter())?;

        initiative.created_at = created_at;
        initiative.updated_at = (self.clock)();
        self.save_initiative(initiative, PersistAction::Update)
    }

    pub fn delete_initiative(&mut self, id: &str) -> SweepResult<()> {
        self.ensure_present(EntityKind::Initiative, id)?;
        self.persist_delete(EntityKind::Initiative, id)?;

        let initiatives = self
            .store
            .initiatives()
            .iter()
            .filter(|i| i.id != id)
            .cloned()
            .collect();
        self.store.set_initiatives(initiatives);
        Ok(())
    }

    /// Link targets to an initiative and revalue it
    pub fn add_targets_to_initiative<T>(
        &mut self,
        initiative_id: &str,
        target_ids: &[T],
    ) -> SweepResult<Initiative>
    where
        T: AsRef<str>,
    {
        let mut initiative = self.existing_initiative(initiative_id)?;
        self.ensure_targets_exist(target_ids.iter())?;

        initiative
            .target_ids
            .extend(target_ids.iter().map(|id| id.as_ref().to_string()));
        initiative.updated_at = (self.clock)();
        self.save_initiative(initiative, PersistAction::Update)
    }

    /// Unlink one target from an initiative and revalue it
    pub fn remove_target_from_initiative(
        &mut self,
        initiative_id: &str,
        target_id: &str,
    ) -> SweepResult<Initiative> {
        let mut initiative = self.existing_initiative(initiative_id)?;
        if !initiative.target_ids.remove(target_id) {
            return Ok(initiative);
        }
        initiative.updated_at = (self.clock)();
        self.save_initiative(initiative, PersistAction::Update)
    }

    fn existing_initiative(&self, id: &str) -> SweepResult<Initiative> {
        self.store
            .initiative(id)
            .cloned()
            .ok_or_else(|| SweepError::NotFound {
                kind: EntityKind::Initiative,
                id: id.to_string(),
            })
    }

    fn ensure_targets_exist<I, T>(&self, target_ids: I) -> SweepResult<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for id in target_ids {
            self.ensure_present(EntityKind::Target, id.as_ref())?;
        }
        Ok(())
    }

    /// Value, persist and commit one initiative
    fn save_initiative(
        &mut self,
        mut initiative: Initiative,
        action: PersistAction,
    ) -> SweepResult<Initiative> {
        initiative.absolute =
            compute_absolute_impact(&initiative, self.store.targets(), &*self.extractor);
        self.persist(action, &Record::Initiative(initiative.clone()))?;

        let mut initiatives = self.store.initiatives().to_vec();
        match initiatives.iter_mut().find(|i| i.id == initiative.id) {
            Some(slot) => *slot = initiative.clone(),
            None => initiatives.push(initiative.clone()),
        }
        self.store.set_initiatives(initiatives);

        if self.events.wants_detailed_events() {
            self.events.on_event(StoreEvent::InitiativeValued {
                id: initiative.id.clone(),
                absolute: initiative.absolute,
            });
        }
        Ok(initiative)
    }

    // --- Scenarios & suppliers ---

    pub fn create_scenario(&mut self, scenario: Scenario) -> SweepResult<()> {
        self.ensure_absent(EntityKind::Scenario, &scenario.id)?;
        self.persist(PersistAction::Create, &Record::Scenario(scenario.clone()))?;

        let mut scenarios = self.store.scenarios().to_vec();
        scenarios.push(scenario);
        self.store.set_scenarios(scenarios);
        Ok(())
    }

    pub fn create_supplier(&mut self, supplier: Supplier) -> SweepResult<()> {
        self.ensure_absent(EntityKind::Supplier, &supplier.id)?;
        self.persist(PersistAction::Create, &Record::Supplier(supplier.clone()))?;

        let mut suppliers = self.store.suppliers().to_vec();
        suppliers.push(supplier);
        self.store.set_suppliers(suppliers);
        Ok(())
    }

    // --- Recalculation (compare before commit) ---

    fn refresh_tracks(&mut self) -> bool {
        let result = recalculate_tracks(self.store.tracks(), self.store.measurements());
        let changed = result.is_changed();
        if let Some(tracks) = result.into_changed() {
            self.store.set_tracks(tracks);
        }
        self.emit_recalculated(EntityKind::Track, changed);
        changed
    }

    fn refresh_targets(&mut self) -> bool {
        let result = recalculate_targets(self.store.targets());
        let changed = result.is_changed();
        if let Some(targets) = result.into_changed() {
            self.store.set_targets(targets);
        }
        self.emit_recalculated(EntityKind::Target, changed);
        changed
    }

    fn refresh_initiatives(&mut self) -> bool {
        let result = recalculate_initiatives(
            self.store.initiatives(),
            self.store.targets(),
            &*self.extractor,
        );
        let changed = result.is_changed();
        if let Some(initiatives) = result.into_changed() {
            if self.events.wants_detailed_events() {
                for (old, new) in self.store.initiatives().iter().zip(&initiatives) {
                    if old.absolute.to_bits() != new.absolute.to_bits() {
                        self.events.on_event(StoreEvent::InitiativeValued {
                            id: new.id.clone(),
                            absolute: new.absolute,
                        });
                    }
                }
            }
            self.store.set_initiatives(initiatives);
        }
        self.emit_recalculated(EntityKind::Initiative, changed);
        changed
    }

    fn emit_recalculated(&self, collection: EntityKind, changed: bool) {
        if self.events.wants_detailed_events() {
            self.events
                .on_event(StoreEvent::Recalculated { collection, changed });
        }
    }

    // --- Persistence ---

    fn persist(&self, action: PersistAction, record: &Record) -> SweepResult<()> {
        let result = match action {
            PersistAction::Create => self.repo.create(record),
            PersistAction::Update => self.repo.update(record),
            PersistAction::Delete => self.repo.delete(record.kind(), record.id()),
        };
        self.report(action, record.kind(), record.id(), result)
    }

    fn persist_delete(&self, kind: EntityKind, id: &str) -> SweepResult<()> {
        let result = self.repo.delete(kind, id);
        self.report(PersistAction::Delete, kind, id, result)
    }

    fn report(
        &self,
        action: PersistAction,
        kind: EntityKind,
        id: &str,
        result: RepositoryResult<()>,
    ) -> SweepResult<()> {
        match result {
            Ok(()) => {
                self.events.on_event(StoreEvent::Persisted {
                    kind,
                    id: id.to_string(),
                    action,
                });
                Ok(())
            }
            Err(err) => {
                self.events.on_event(StoreEvent::PersistFailed {
                    kind,
                    id: id.to_string(),
                    action,
                    error: err.to_string(),
                });
                Err(err.into())
            }
        }
    }

    fn ensure_absent(&self, kind: EntityKind, id: &str) -> SweepResult<()> {
        if self.store.contains(kind, id) {
            return Err(SweepError::Duplicate {
                kind,
                id: id.to_string(),
            });
        }
        Ok(())
    }

    fn ensure_present(&self, kind: EntityKind, id: &str) -> SweepResult<()> {
        if !self.store.contains(kind, id) {
            return Err(SweepError::NotFound {
                kind,
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

/// NaN and infinities cannot be written to a JSON snapshot
fn ensure_finite(
    kind: EntityKind,
    id: &str,
    fields: &[(&'static str, f64)],
) -> SweepResult<()> {
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => Err(SweepError::NonFinite {
            kind,
            id: id.to_string(),
            field: *field,
            value: *value,
        }),
        None => Ok(()),
    }
}
