//! Measurement entity - one recorded activity quantity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Factor;

/// A recorded quantity of activity and the emissions it produced
///
/// `calculated_value` is fixed when the measurement is recorded; later
/// changes to the factor rate do not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: String,
    pub track_id: String,
    pub factor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    pub date: NaiveDate,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub calculated_value: f64,
}

impl Measurement {
    /// Record `quantity` against `factor`, computing the emissions value
    pub fn record(id: impl Into<String>, factor: &Factor, quantity: f64, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            track_id: factor.track_id.clone(),
            factor_id: factor.id.clone(),
            supplier_id: None,
            date,
            quantity,
            unit: factor.unit.clone(),
            calculated_value: factor.convert(quantity),
        }
    }

    /// Builder: attribute the measurement to a supplier
    pub fn with_supplier(mut self, supplier_id: impl Into<String>) -> Self {
        self.supplier_id = Some(supplier_id.into());
        self
    }

    /// `YYYY-MM` bucket used for monthly trends
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}
