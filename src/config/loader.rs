//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SweepError, SweepResult};

use super::types::{Config, Verbosity};

/// Project config location, relative to the project root
pub const PROJECT_CONFIG: &str = ".sweep/config.toml";

/// Unknown key found while parsing a config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Keys a misspelling can be matched against
const KNOWN_KEYS: &[&str] = &[
    "store",
    "snapshot",
    "assistant",
    "thinking_delay_ms",
    "dashboard_url",
    "top_n",
    "valuation",
    "default_percentage",
    "output",
    "verbosity",
    "color",
    "unicode",
];

pub fn load_with_warnings(path: &Path) -> SweepResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut ignored = Vec::new();
    let config: Config =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |key_path| {
            ignored.push(key_path.to_string())
        })
        .map_err(|e| SweepError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = ignored
        .iter()
        .map(|key_path| {
            // serde_ignored reports dotted paths; users typed only the last segment
            let key = key_path.rsplit('.').next().unwrap_or(key_path);
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: content
                    .lines()
                    .position(|line| line.contains(key))
                    .map(|index| index + 1),
                suggestion: closest_known_key(key).map(str::to_string),
            }
        })
        .collect();

    Ok((config, warnings))
}

pub fn load_layered(project_root: Option<&Path>) -> SweepResult<(Config, Vec<ConfigWarning>)> {
    let user_file = user_config_dir().map(|dir| dir.join("sweep").join("config.toml"));
    let found = project_root
        .map(|root| root.join(PROJECT_CONFIG))
        .into_iter()
        .chain(user_file)
        .find(|path| path.exists());

    let (config, warnings) = match found {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };
    Ok((with_env_overrides(config), warnings))
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// `SWEEP_*` variables override whatever the files said
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Some(path) = env_var("SWEEP_SNAPSHOT") {
        config.store.snapshot = PathBuf::from(path);
    }
    if let Some(ms) = env_var("SWEEP_THINKING_DELAY_MS").and_then(|v| v.parse().ok()) {
        config.assistant.thinking_delay_ms = ms;
    }
    if let Some(n) = env_var("SWEEP_TOP_N").and_then(|v| v.parse().ok()) {
        config.assistant.top_n = n;
    }
    if let Some(level) = env_var("SWEEP_VERBOSITY") {
        config.output.verbosity = match level.to_ascii_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }
    config
}

/// `$XDG_CONFIG_HOME` when set, else the platform config dir
fn user_config_dir() -> Option<PathBuf> {
    env_var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Nearest known key within two edits
fn closest_known_key(unknown: &str) -> Option<&'static str> {
    KNOWN_KEYS
        .iter()
        .map(|known| (*known, edit_distance(unknown, known)))
        .min_by_key(|(_, distance)| *distance)
        .filter(|(_, distance)| *distance <= 2)
        .map(|(known, _)| known)
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
