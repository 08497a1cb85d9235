//! Store Event Port
//!
//! Provides an observable interface for state changes on the dashboard.
//! Enables NDJSON event streams, verbose console traces, and debugging.

use crate::domain::services::IntentKind;
use crate::domain::value_objects::EntityKind;

/// Which repository operation an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistAction {
    Create,
    Update,
    Delete,
}

impl PersistAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersistAction::Create => "create",
            PersistAction::Update => "update",
            PersistAction::Delete => "delete",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            PersistAction::Create => "created",
            PersistAction::Update => "updated",
            PersistAction::Delete => "deleted",
        }
    }
}

/// Event emitted by the state owner and the assistant
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// Store loaded from the repository
    Loaded { records: usize },

    /// A derived collection was recomputed
    Recalculated { collection: EntityKind, changed: bool },

    /// An initiative's absolute impact was (re)computed
    InitiativeValued { id: String, absolute: f64 },

    /// The repository accepted a change
    Persisted {
        kind: EntityKind,
        id: String,
        action: PersistAction,
    },

    /// The repository rejected a change; the store was left untouched
    PersistFailed {
        kind: EntityKind,
        id: String,
        action: PersistAction,
        error: String,
    },

    /// The assistant answered a question
    QueryResolved { intent: IntentKind, fallback: bool },
}

/// Trait for receiving store events
///
/// Implementations can be:
/// - ConsoleEventSink: One line per event on stderr
/// - JsonEventSink: NDJSON event stream for automation
/// - NoopEventSink: Silent operation
pub trait StoreEventSink: Send + Sync {
    /// Handle a store event
    fn on_event(&self, event: StoreEvent);

    /// Check if this sink wants detailed events (recalculations, valuations)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl StoreEventSink for NoopEventSink {
    fn on_event(&self, _event: StoreEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

impl<S: StoreEventSink + ?Sized> StoreEventSink for std::sync::Arc<S> {
    fn on_event(&self, event: StoreEvent) {
        (**self).on_event(event)
    }

    fn wants_detailed_events(&self) -> bool {
        (**self).wants_detailed_events()
    }
}

impl<S: StoreEventSink + ?Sized> StoreEventSink for Box<S> {
    fn on_event(&self, event: StoreEvent) {
        (**self).on_event(event)
    }

    fn wants_detailed_events(&self) -> bool {
        (**self).wants_detailed_events()
    }
}
