//! Settings read from `.sweep/config.toml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::ResolverOptions;
use crate::error::SweepResult;

use super::loader::{self, ConfigWarning};

/// Snapshot location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Relative paths are resolved against the project root
    #[serde(default = "default_snapshot")]
    pub snapshot: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
        }
    }
}

fn default_snapshot() -> PathBuf {
    PathBuf::from(".sweep/snapshot.json")
}

/// Chat assistant configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Pause before printing an answer; purely cosmetic
    #[serde(default)]
    pub thinking_delay_ms: u64,

    #[serde(default = "default_dashboard_url")]
    pub dashboard_url: String,

    /// Rows shown in ranked answers
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: 0,
            dashboard_url: default_dashboard_url(),
            top_n: default_top_n(),
        }
    }
}

fn default_dashboard_url() -> String {
    "/dashboard".to_string()
}

fn default_top_n() -> usize {
    5
}

/// Initiative valuation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValuationConfig {
    /// Used when a plan carries no percentage
    #[serde(default)]
    pub default_percentage: f64,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Level handed to the console event sink
    pub fn level(&self) -> u8 {
        match self {
            Verbosity::Quiet | Verbosity::Normal => 0,
            Verbosity::Verbose => 1,
            Verbosity::Debug => 2,
        }
    }
}

/// Everything `sweep` reads from a config file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub valuation: ValuationConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Parse one file, dropping unknown-key warnings
    pub fn load(path: &Path) -> SweepResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Parse one file and report keys that were ignored
    pub fn load_with_warnings(path: &Path) -> SweepResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Project config, then user config, then defaults; the first file found wins
    pub fn load_layered(project_root: Option<&Path>) -> SweepResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(project_root)
    }

    /// Snapshot path, resolved against `project_root` when relative
    pub fn snapshot_path(&self, project_root: &Path) -> PathBuf {
        if self.store.snapshot.is_absolute() {
            self.store.snapshot.clone()
        } else {
            project_root.join(&self.store.snapshot)
        }
    }

    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            top_n: self.assistant.top_n,
            dashboard_url: self.assistant.dashboard_url.clone(),
        }
    }
}
