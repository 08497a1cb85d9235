//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Dashboard` - Owns the entity store; CRUD through the repository port,
//!   followed by compare-before-commit recalculation
//! - `AssistantUseCase` - Answers chat questions from the current store

pub mod assistant;
pub mod dashboard;

pub use assistant::AssistantUseCase;
pub use dashboard::{Clock, Dashboard, NewMeasurement};
