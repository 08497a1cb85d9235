//! Command handlers for the `sweep` binary
//!
//! Each handler receives a `Session` holding the resolved configuration,
//! the snapshot path and the terminal context.

pub mod ask;
pub mod init;
pub mod link;
pub mod measure;
pub mod project_root;
pub mod recalc;
pub mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use sweep::config::{Config, ConfigWarning};
use sweep::presentation::factory::{self, ConcreteDashboard, SharedEventSink};
use sweep::presentation::Cli;

use crate::ui::context::UiContext;

/// Everything a command needs besides its own arguments
pub struct Session {
    pub config: Config,
    pub snapshot: PathBuf,
    pub ui: UiContext,
    pub command: &'static str,
}

impl Session {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot read current directory")?;
        let root = project_root::discover_project_root(&cwd);
        let (config, warnings) = Config::load_layered(Some(&root))?;
        let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

        if !ui.json {
            for warning in &warnings {
                eprint!("{}", format_warning(warning));
            }
        }

        let snapshot = match &cli.snapshot {
            Some(path) => path.clone(),
            None => config.snapshot_path(&root),
        };

        Ok(Self {
            config,
            snapshot,
            ui,
            command: cli.command.name(),
        })
    }

    pub fn events(&self) -> SharedEventSink {
        factory::create_event_sink(self.ui.json, self.command, self.ui.verbose)
    }

    /// Dashboard over the snapshot with its store loaded
    pub fn load_dashboard(&self, events: SharedEventSink) -> Result<ConcreteDashboard> {
        let mut dashboard = factory::create_dashboard(&self.snapshot, &self.config, events);
        dashboard
            .load()
            .with_context(|| format!("failed to load {}", self.snapshot.display()))?;
        Ok(dashboard)
    }
}

fn format_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => format!(
            "[WARN] Unknown config key '{}' at {}. Did you mean '{}'?\n",
            warning.key, location, suggestion
        ),
        None => format!(
            "[WARN] Unknown config key '{}' at {}\n",
            warning.key, location
        ),
    }
}

/// Print a JSON value on its own line
pub fn emit_json(value: &serde_json::Value) {
    println!("{}", value);
}
