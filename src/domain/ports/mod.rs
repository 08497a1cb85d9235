//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod entity_repository;
pub mod store_events;

pub use entity_repository::{EntityRepository, Record, RepositoryError, RepositoryResult};
pub use store_events::{NoopEventSink, PersistAction, StoreEvent, StoreEventSink};
