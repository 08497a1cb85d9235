//! Lifecycle status value objects for targets and initiatives

use serde::{Deserialize, Serialize};

/// Where a reduction target stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
    #[default]
    OnTrack,
    AtRisk,
    OffTrack,
    Achieved,
}

impl TargetStatus {
    pub const ALL: [TargetStatus; 4] = [
        TargetStatus::OnTrack,
        TargetStatus::AtRisk,
        TargetStatus::OffTrack,
        TargetStatus::Achieved,
    ];

    /// Human label, used in chart legends
    pub fn label(&self) -> &'static str {
        match self {
            TargetStatus::OnTrack => "On track",
            TargetStatus::AtRisk => "At risk",
            TargetStatus::OffTrack => "Off track",
            TargetStatus::Achieved => "Achieved",
        }
    }
}

impl std::fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Delivery status of an initiative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InitiativeStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

impl InitiativeStatus {
    /// Returns true if the initiative still counts toward planned spend
    pub fn is_active(&self) -> bool {
        matches!(self, InitiativeStatus::Planned | InitiativeStatus::InProgress)
    }
}

impl std::fmt::Display for InitiativeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitiativeStatus::Planned => write!(f, "planned"),
            InitiativeStatus::InProgress => write!(f, "in progress"),
            InitiativeStatus::Completed => write!(f, "completed"),
            InitiativeStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_status_default_is_on_track() {
        assert_eq!(TargetStatus::default(), TargetStatus::OnTrack);
    }

    #[test]
    fn target_status_serde_snake_case() {
        let parsed: TargetStatus = serde_json::from_str("\"off_track\"").unwrap();
        assert_eq!(parsed, TargetStatus::OffTrack);
    }

    #[test]
    fn initiative_status_active() {
        assert!(InitiativeStatus::Planned.is_active());
        assert!(InitiativeStatus::InProgress.is_active());
        assert!(!InitiativeStatus::Completed.is_active());
        assert!(!InitiativeStatus::Cancelled.is_active());
    }
}
