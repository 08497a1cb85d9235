//! Error types for Sweep
//!
//! Library errors use `thiserror`. The recalculation, valuation and query
//! services never produce errors; these variants cover the edges where the
//! state owner talks to configuration and persistence.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RepositoryError;
use crate::domain::value_objects::EntityKind;

/// Result type alias for Sweep operations
pub type SweepResult<T> = Result<T, SweepError>;

/// Main error type for Sweep operations
#[derive(Error, Debug)]
pub enum SweepError {
    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// An operation referenced an entity that is not in the store
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    /// A record with the same id already exists
    #[error("{kind} '{id}' already exists")]
    Duplicate { kind: EntityKind, id: String },

    /// A factor was used with a measurement for a different track
    #[error("factor '{factor}' belongs to track '{factor_track}', not '{track}'")]
    FactorTrackMismatch {
        factor: String,
        factor_track: String,
        track: String,
    },

    /// A numeric input was NaN or infinite
    #[error("{kind} '{id}': {field} must be a finite number, got {value}")]
    NonFinite {
        kind: EntityKind,
        id: String,
        field: &'static str,
        value: f64,
    },

    /// Persistence collaborator rejected the change
    #[error("persistence error: {0}")]
    Repository(#[from] RepositoryError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
