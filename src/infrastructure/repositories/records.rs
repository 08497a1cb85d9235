//! Record-level edits shared by the repository implementations

use crate::domain::entities::{
    EntityStore, Factor, Initiative, Measurement, Scenario, Supplier, Target, Track,
};
use crate::domain::ports::{Record, RepositoryError, RepositoryResult};
use crate::domain::value_objects::EntityKind;

trait Keyed: Clone {
    fn key(&self) -> &str;
}

macro_rules! keyed {
    ($($ty:ty),* $(,)?) => {
        $(impl Keyed for $ty {
            fn key(&self) -> &str {
                &self.id
            }
        })*
    };
}

keyed!(Track, Factor, Measurement, Target, Initiative, Scenario, Supplier);

/// Insert a new record; the id must be free
pub(super) fn create(store: &mut EntityStore, record: &Record) -> RepositoryResult<()> {
    if store.contains(record.kind(), record.id()) {
        return Err(RepositoryError::AlreadyExists {
            kind: record.kind(),
            id: record.id().to_string(),
        });
    }
    write(store, record.clone());
    Ok(())
}

/// Replace an existing record in place
pub(super) fn update(store: &mut EntityStore, record: &Record) -> RepositoryResult<()> {
    ensure_present(store, record.kind(), record.id())?;
    write(store, record.clone());
    Ok(())
}

pub(super) fn delete(store: &mut EntityStore, kind: EntityKind, id: &str) -> RepositoryResult<()> {
    ensure_present(store, kind, id)?;
    match kind {
        EntityKind::Track => {
            let rest = without(store.tracks(), id);
            store.set_tracks(rest);
        }
        EntityKind::Factor => {
            let rest = without(store.factors(), id);
            store.set_factors(rest);
        }
        EntityKind::Measurement => {
            let rest = without(store.measurements(), id);
            store.set_measurements(rest);
        }
        EntityKind::Target => {
            let rest = without(store.targets(), id);
            store.set_targets(rest);
        }
        EntityKind::Initiative => {
            let rest = without(store.initiatives(), id);
            store.set_initiatives(rest);
        }
        EntityKind::Scenario => {
            let rest = without(store.scenarios(), id);
            store.set_scenarios(rest);
        }
        EntityKind::Supplier => {
            let rest = without(store.suppliers(), id);
            store.set_suppliers(rest);
        }
    }
    Ok(())
}

fn ensure_present(store: &EntityStore, kind: EntityKind, id: &str) -> RepositoryResult<()> {
    if !store.contains(kind, id) {
        return Err(RepositoryError::NotFound {
            kind,
            id: id.to_string(),
        });
    }
    Ok(())
}

fn write(store: &mut EntityStore, record: Record) {
    match record {
        Record::Track(r) => {
            let all = upsert(store.tracks(), r);
            store.set_tracks(all);
        }
        Record::Factor(r) => {
            let all = upsert(store.factors(), r);
            store.set_factors(all);
        }
        Record::Measurement(r) => {
            let all = upsert(store.measurements(), r);
            store.set_measurements(all);
        }
        Record::Target(r) => {
            let all = upsert(store.targets(), r);
            store.set_targets(all);
        }
        Record::Initiative(r) => {
            let all = upsert(store.initiatives(), r);
            store.set_initiatives(all);
        }
        Record::Scenario(r) => {
            let all = upsert(store.scenarios(), r);
            store.set_scenarios(all);
        }
        Record::Supplier(r) => {
            let all = upsert(store.suppliers(), r);
            store.set_suppliers(all);
        }
    }
}

fn upsert<T: Keyed>(items: &[T], item: T) -> Vec<T> {
    let mut items = items.to_vec();
    match items.iter_mut().find(|existing| existing.key() == item.key()) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
    items
}

fn without<T: Keyed>(items: &[T], id: &str) -> Vec<T> {
    items.iter().filter(|r| r.key() != id).cloned().collect()
}
