//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod chart;
mod entity_kind;
mod status;

pub use chart::{ChartPoint, ChartType};
pub use entity_kind::EntityKind;
pub use status::{InitiativeStatus, TargetStatus};
