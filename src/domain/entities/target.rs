//! Target entity - a reduction goal expressed as a percentage off a baseline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TargetStatus;

/// A reduction target for one track
///
/// `target_value` is derived: `baseline_value * (1 - target_percentage / 100)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: String,
    pub name: String,
    pub track_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_id: Option<String>,
    pub baseline_value: f64,
    pub target_percentage: f64,
    #[serde(default)]
    pub target_value: f64,
    #[serde(default)]
    pub status: TargetStatus,
    pub target_date: NaiveDate,
}

impl Target {
    /// Create a target with its derived value already in place
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        track_id: impl Into<String>,
        baseline_value: f64,
        target_percentage: f64,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            track_id: track_id.into(),
            scenario_id: None,
            baseline_value,
            target_percentage,
            target_value: Self::reduced_value(baseline_value, target_percentage),
            status: TargetStatus::default(),
            target_date,
        }
    }

    /// Builder: place the target in a scenario
    pub fn with_scenario(mut self, scenario_id: impl Into<String>) -> Self {
        self.scenario_id = Some(scenario_id.into());
        self
    }

    /// Builder: set the status
    pub fn with_status(mut self, status: TargetStatus) -> Self {
        self.status = status;
        self
    }

    /// `baseline * (1 - percentage / 100)`
    ///
    /// A non-finite baseline contributes nothing; a non-finite percentage is
    /// read as no reduction.
    pub fn reduced_value(baseline_value: f64, target_percentage: f64) -> f64 {
        if !baseline_value.is_finite() {
            return 0.0;
        }
        let percentage = if target_percentage.is_finite() {
            target_percentage
        } else {
            0.0
        };
        baseline_value * (1.0 - percentage / 100.0)
    }

    /// What `target_value` should be given the current baseline and percentage
    pub fn expected_value(&self) -> f64 {
        Self::reduced_value(self.baseline_value, self.target_percentage)
    }

    /// Progress toward the target given the track's current emissions, 0..=100
    pub fn progress(&self, current_emissions: f64) -> f64 {
        let reduction_needed = self.baseline_value - self.target_value;
        if !reduction_needed.is_finite() || !current_emissions.is_finite() {
            return 0.0;
        }
        if reduction_needed <= 0.0 {
            return if current_emissions <= self.target_value {
                100.0
            } else {
                0.0
            };
        }
        let achieved = self.baseline_value - current_emissions;
        (achieved / reduction_needed * 100.0).clamp(0.0, 100.0)
    }
}
