//! Inputs for dashboard operations

use chrono::NaiveDate;

/// A measurement to record; the emissions value is computed from the factor
#[derive(Debug, Clone, PartialEq)]
pub struct NewMeasurement {
    pub id: String,
    pub factor_id: String,
    pub quantity: f64,
    pub date: NaiveDate,
    /// When set, must match the factor's track
    pub track_id: Option<String>,
    pub supplier_id: Option<String>,
}

impl NewMeasurement {
    pub fn new(
        id: impl Into<String>,
        factor_id: impl Into<String>,
        quantity: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            factor_id: factor_id.into(),
            quantity,
            date,
            track_id: None,
            supplier_id: None,
        }
    }

    /// Set the track the caller expects the factor to belong to
    pub fn with_track(mut self, track_id: impl Into<String>) -> Self {
        self.track_id = Some(track_id.into());
        self
    }

    /// Set supplier
    pub fn with_supplier(mut self, supplier_id: impl Into<String>) -> Self {
        self.supplier_id = Some(supplier_id.into());
        self
    }
}
