//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Entity repository implementations (JSON snapshot, in-memory)
//! - `events/` - Store event sinks (NDJSON, console)

pub mod events;
pub mod repositories;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use repositories::{InMemoryRepository, JsonSnapshotRepository};
