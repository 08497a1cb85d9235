//! Domain Layer
//!
//! This is the core of Sweep - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Tracks, factors, measurements, targets, initiatives, scenarios, suppliers
//! - `value_objects/` - Immutable value types (EntityKind, statuses, chart data)
//! - `services/` - Recalculator, valuation, percentage extraction, query resolver
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and never fail
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
