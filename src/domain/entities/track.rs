//! Track entity - a category of emissions activity (electricity, travel, ...)

use serde::{Deserialize, Serialize};

/// An emissions track
///
/// `total_emissions` is derived from the measurement collection and is only
/// ever written by the recalculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub total_emissions: f64,
}

impl Track {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji: String::new(),
            total_emissions: 0.0,
        }
    }

    /// Builder: set the emoji shown next to the track name
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Name prefixed with the emoji, if there is one
    pub fn label(&self) -> String {
        if self.emoji.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.emoji, self.name)
        }
    }
}
