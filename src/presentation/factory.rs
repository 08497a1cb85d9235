//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{AssistantUseCase, Dashboard};
use crate::config::Config;
use crate::domain::ports::StoreEventSink;
use crate::domain::services::FirstPercentExtractor;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink, JsonSnapshotRepository};

/// Event sink shared between the dashboard and the assistant
pub type SharedEventSink = Arc<dyn StoreEventSink>;

/// Type alias for the concrete Dashboard with all dependencies
pub type ConcreteDashboard = Dashboard<JsonSnapshotRepository, SharedEventSink>;

/// Type alias for the concrete assistant
pub type ConcreteAssistant = AssistantUseCase<SharedEventSink>;

/// NDJSON events on stdout in JSON mode, otherwise a console trace on stderr
pub fn create_event_sink(json: bool, command: &'static str, verbosity: u8) -> SharedEventSink {
    if json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::stderr(verbosity))
    }
}

/// Create a dashboard over the snapshot at `snapshot`
///
/// The store starts empty; call `load` before reading it.
pub fn create_dashboard(
    snapshot: &Path,
    config: &Config,
    events: SharedEventSink,
) -> ConcreteDashboard {
    let repo = JsonSnapshotRepository::new(snapshot);
    let extractor = FirstPercentExtractor::new(config.valuation.default_percentage);
    Dashboard::new(repo, events).with_extractor(extractor)
}

/// Create the chat assistant with the configured resolver options
pub fn create_assistant(config: &Config, events: SharedEventSink) -> ConcreteAssistant {
    AssistantUseCase::new(config.resolver_options(), events)
}
