//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and never fail: degraded inputs
//! produce default values instead of errors.

pub mod percentage;
pub mod query;
pub mod recalculator;
pub mod valuation;

pub use percentage::{extract_percentage, FirstPercentExtractor, PercentageExtractor};
pub use query::{
    resolve_query, IntentError, IntentKind, QueryAnswer, QueryResolver, QuerySnapshot,
    ResolverOptions, INTENT_ORDER,
};
pub use recalculator::{
    recalculate_targets, recalculate_tracks, recompute_target_values, recompute_track_totals,
    track_total, Derived, Recalculation,
};
pub use valuation::{compute_absolute_impact, recalculate_initiatives, revalue_initiatives};
