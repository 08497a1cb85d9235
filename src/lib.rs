//! Sweep - carbon accounting core
//!
//! Sweep keeps emission tracks, factors, measurements, reduction targets and
//! initiatives in one store, keeps their derived values consistent, and
//! answers plain-language questions about them through the Sweepy assistant.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{AssistantUseCase, Dashboard, NewMeasurement};
pub use config::Config;
pub use domain::entities::EntityStore;
pub use domain::services::{
    compute_absolute_impact, extract_percentage, recompute_target_values, recompute_track_totals,
    resolve_query, QueryAnswer, QuerySnapshot,
};
pub use error::{SweepError, SweepResult};
