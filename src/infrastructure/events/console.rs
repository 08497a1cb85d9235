//! Console Event Sink
//!
//! One human-readable line per event, written to stderr so that command
//! output on stdout stays clean.

use crate::domain::ports::{StoreEvent, StoreEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

pub struct ConsoleEventSink {
    verbosity: u8,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    /// `verbosity` 1 reports persistence, 2 and above adds recalculations
    pub fn stderr(verbosity: u8) -> Self {
        Self::with_writer(verbosity, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbosity: u8, writer: W) -> Self {
        Self {
            verbosity,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(event: &StoreEvent) -> String {
        match event {
            StoreEvent::Loaded { records } => format!("loaded {records} records"),
            StoreEvent::Recalculated {
                collection,
                changed: true,
            } => format!("recalculated {collection}s"),
            StoreEvent::Recalculated {
                collection,
                changed: false,
            } => format!("{collection}s unchanged"),
            StoreEvent::InitiativeValued { id, absolute } => {
                format!("initiative '{id}' valued at {absolute:.1} tCO2e")
            }
            StoreEvent::Persisted { kind, id, action } => {
                format!("{} {kind} '{id}'", action.past_tense())
            }
            StoreEvent::PersistFailed {
                kind,
                id,
                action,
                error,
            } => format!("failed to {} {kind} '{id}': {error}", action.as_str()),
            StoreEvent::QueryResolved {
                intent,
                fallback: false,
            } => format!("answered as {intent}"),
            StoreEvent::QueryResolved { fallback: true, .. } => {
                "no intent matched, using fallback".to_string()
            }
        }
    }
}

impl StoreEventSink for ConsoleEventSink {
    fn on_event(&self, event: StoreEvent) {
        let always = matches!(event, StoreEvent::PersistFailed { .. });
        if self.verbosity == 0 && !always {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "  · {}", Self::line(&event));
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= 2
    }
}
