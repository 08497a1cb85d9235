//! EntityRepository port - the remote data store behind the dashboard
//!
//! The core never reaches the data store directly. The state owner calls
//! this port first and only commits to the in-memory store once the
//! repository has accepted the change.

use std::path::PathBuf;

use crate::domain::entities::{
    EntityStore, Factor, Initiative, Measurement, Scenario, Supplier, Target, Track,
};
use crate::domain::value_objects::EntityKind;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// One record of any entity kind, as handed to the repository
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Track(Track),
    Factor(Factor),
    Measurement(Measurement),
    Target(Target),
    Initiative(Initiative),
    Scenario(Scenario),
    Supplier(Supplier),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Track(_) => EntityKind::Track,
            Record::Factor(_) => EntityKind::Factor,
            Record::Measurement(_) => EntityKind::Measurement,
            Record::Target(_) => EntityKind::Target,
            Record::Initiative(_) => EntityKind::Initiative,
            Record::Scenario(_) => EntityKind::Scenario,
            Record::Supplier(_) => EntityKind::Supplier,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Record::Track(r) => &r.id,
            Record::Factor(r) => &r.id,
            Record::Measurement(r) => &r.id,
            Record::Target(r) => &r.id,
            Record::Initiative(r) => &r.id,
            Record::Scenario(r) => &r.id,
            Record::Supplier(r) => &r.id,
        }
    }
}

/// Persistence collaborator: bulk fetch plus per-record create/update/delete
pub trait EntityRepository: Send + Sync {
    /// Load all seven collections
    fn fetch_all(&self) -> RepositoryResult<EntityStore>;

    /// Insert a new record; fails if the id is taken
    fn create(&self, record: &Record) -> RepositoryResult<()>;

    /// Replace an existing record; fails if the id is unknown
    fn update(&self, record: &Record) -> RepositoryResult<()>;

    /// Remove a record; fails if the id is unknown
    fn delete(&self, kind: EntityKind, id: &str) -> RepositoryResult<()>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{kind} '{id}' does not exist in the data store")]
    NotFound { kind: EntityKind, id: String },

    #[error("{kind} '{id}' already exists in the data store")]
    AlreadyExists { kind: EntityKind, id: String },

    #[error("Failed to access data store: {message}")]
    Access { message: String },

    #[error("Failed to serialize data store: {message}")]
    Serialization { message: String },

    #[error(
        "snapshot file corrupted: {path}\n  → Fix: restore from backup or run `sweep init --force`\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },

    #[error("snapshot version {found} is not supported (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },
}
