//! In-memory Entity Repository
//!
//! Used by tests and by commands that must not touch the snapshot file.

use std::sync::{Mutex, MutexGuard};

use super::records;
use crate::domain::entities::EntityStore;
use crate::domain::ports::{EntityRepository, Record, RepositoryError, RepositoryResult};
use crate::domain::value_objects::EntityKind;

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    store: Mutex<EntityStore>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing contents
    pub fn with_store(store: EntityStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> RepositoryResult<EntityStore> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, EntityStore>> {
        self.store.lock().map_err(|e| RepositoryError::Access {
            message: e.to_string(),
        })
    }
}

impl EntityRepository for InMemoryRepository {
    fn fetch_all(&self) -> RepositoryResult<EntityStore> {
        self.snapshot()
    }

    fn create(&self, record: &Record) -> RepositoryResult<()> {
        records::create(&mut *self.lock()?, record)
    }

    fn update(&self, record: &Record) -> RepositoryResult<()> {
        records::update(&mut *self.lock()?, record)
    }

    fn delete(&self, kind: EntityKind, id: &str) -> RepositoryResult<()> {
        records::delete(&mut *self.lock()?, kind, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Supplier;

    #[test]
    fn create_then_fetch() {
        let repo = InMemoryRepository::new();
        repo.create(&Record::Supplier(Supplier::new("acme", "Acme")))
            .unwrap();

        let store = repo.fetch_all().unwrap();
        assert_eq!(store.suppliers().len(), 1);
    }

    #[test]
    fn fetch_returns_a_copy() {
        let repo = InMemoryRepository::new();
        let mut fetched = repo.fetch_all().unwrap();
        fetched.set_suppliers(vec![Supplier::new("x", "X")]);

        assert!(repo.fetch_all().unwrap().is_empty());
    }
}
