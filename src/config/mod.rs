//! Configuration module for Sweep
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SWEEP_*)
//! 3. Project config (.sweep/config.toml)
//! 4. User config (~/.config/sweep/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG};
pub use types::{
    AssistantConfig, ColorMode, Config, OutputConfig, StoreConfig, ValuationConfig, Verbosity,
};
