//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Track` - An emissions category, carries a derived total
//! - `Factor` / `Measurement` - Conversion rates and recorded activity
//! - `Target` / `Initiative` - Reduction goals and the efforts behind them
//! - `Scenario` / `Supplier` - Named reference records
//! - `EntityStore` - The seven collections, replaced wholesale

mod catalog;
mod factor;
mod initiative;
mod measurement;
mod store;
mod target;
mod track;

pub use catalog::{Scenario, Supplier};
pub use factor::Factor;
pub use initiative::Initiative;
pub use measurement::Measurement;
pub use store::EntityStore;
pub use target::Target;
pub use track::Track;
