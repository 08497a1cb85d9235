//! Factor entity - converts a raw activity quantity into emissions

use serde::{Deserialize, Serialize};

/// Emission factor attached to a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub id: String,
    pub name: String,
    pub track_id: String,
    pub unit: String,
    /// Emissions per unit of activity
    pub rate: f64,
}

impl Factor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        track_id: impl Into<String>,
        unit: impl Into<String>,
        rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            track_id: track_id.into(),
            unit: unit.into(),
            rate,
        }
    }

    /// Emissions for `quantity` units of activity
    pub fn convert(&self, quantity: f64) -> f64 {
        quantity * self.rate
    }
}
