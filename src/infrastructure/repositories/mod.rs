//! Repository Implementations
//!
//! Concrete implementations of the `EntityRepository` port.

mod json_snapshot;
mod memory;
mod records;

pub use json_snapshot::{JsonSnapshotRepository, SNAPSHOT_VERSION};
pub use memory::InMemoryRepository;
