//! Initiative entity - a funded effort contributing to one or more targets

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::InitiativeStatus;

/// A funded reduction initiative
///
/// `absolute` is derived from the linked targets and the percentage found in
/// `plan`; it is rewritten by the valuation engine only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initiative {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub target_ids: BTreeSet<String>,
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub spend: f64,
    #[serde(default)]
    pub absolute: f64,
    #[serde(default)]
    pub status: InitiativeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Initiative {
    pub fn new(id: impl Into<String>, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target_ids: BTreeSet::new(),
            plan: String::new(),
            spend: 0.0,
            absolute: 0.0,
            status: InitiativeStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder: set the free-text plan
    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = plan.into();
        self
    }

    /// Builder: set the spend
    pub fn with_spend(mut self, spend: f64) -> Self {
        self.spend = spend;
        self
    }

    /// Builder: set the status
    pub fn with_status(mut self, status: InitiativeStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder: link targets
    pub fn with_targets<I, S>(mut self, target_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_ids = target_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if `target_id` is linked to this initiative
    pub fn is_linked_to(&self, target_id: &str) -> bool {
        self.target_ids.contains(target_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_initiative_has_no_links() {
        let now = Utc::now();
        let initiative = Initiative::new("i1", "LED retrofit", now);
        assert!(initiative.target_ids.is_empty());
        assert_eq!(initiative.absolute, 0.0);
        assert_eq!(initiative.created_at, initiative.updated_at);
    }

    #[test]
    fn with_targets_deduplicates() {
        let initiative =
            Initiative::new("i1", "LED retrofit", Utc::now()).with_targets(["t1", "t2", "t1"]);
        assert_eq!(initiative.target_ids.len(), 2);
        assert!(initiative.is_linked_to("t2"));
        assert!(!initiative.is_linked_to("t3"));
    }
}
