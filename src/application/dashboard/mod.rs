//! Dashboard Use Case
//!
//! Owns the entity store and keeps its derived fields consistent.

mod input;
mod use_case;

pub use input::NewMeasurement;
pub use use_case::{Clock, Dashboard};
