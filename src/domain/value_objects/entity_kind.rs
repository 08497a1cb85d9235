//! EntityKind value object - names the seven collections of the store

use serde::{Deserialize, Serialize};

/// One of the collections held by the entity store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Track,
    Factor,
    Measurement,
    Target,
    Initiative,
    Scenario,
    Supplier,
}

impl EntityKind {
    /// All kinds, in the order the store lists them
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Track,
        EntityKind::Factor,
        EntityKind::Measurement,
        EntityKind::Target,
        EntityKind::Initiative,
        EntityKind::Scenario,
        EntityKind::Supplier,
    ];

    /// Lowercase singular name
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Track => "track",
            EntityKind::Factor => "factor",
            EntityKind::Measurement => "measurement",
            EntityKind::Target => "target",
            EntityKind::Initiative => "initiative",
            EntityKind::Scenario => "scenario",
            EntityKind::Supplier => "supplier",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase() {
        assert_eq!(EntityKind::Initiative.to_string(), "initiative");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&EntityKind::Supplier).unwrap();
        assert_eq!(json, "\"supplier\"");
    }

    #[test]
    fn all_lists_every_kind_once() {
        let mut kinds = EntityKind::ALL.to_vec();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), 7);
    }
}
