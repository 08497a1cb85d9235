//! NDJSON store events, one object per line, tagged with the running command

use crate::domain::ports::{StoreEvent, StoreEventSink};
use serde_json::{json, Value};
use std::io::{self, Write};
use std::sync::Mutex;

pub struct JsonEventSink {
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Sink over any writer; tests pass an in-memory buffer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl StoreEventSink for JsonEventSink {
    fn on_event(&self, event: StoreEvent) {
        let mut body = event_body(event);
        if let Some(fields) = body.as_object_mut() {
            fields.insert("command".to_string(), self.command.into());
        }
        self.write_event(body);
    }

    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// Event fields without the command tag
fn event_body(event: StoreEvent) -> Value {
    match event {
        StoreEvent::Loaded { records } => json!({ "event": "loaded", "records": records }),
        StoreEvent::Recalculated {
            collection,
            changed,
        } => json!({
            "event": "recalculated",
            "collection": collection.as_str(),
            "changed": changed,
        }),
        StoreEvent::InitiativeValued { id, absolute } => json!({
            "event": "valued",
            "initiative": id,
            "absolute": absolute,
        }),
        StoreEvent::Persisted { kind, id, action } => json!({
            "event": "persisted",
            "kind": kind.as_str(),
            "id": id,
            "action": action.as_str(),
        }),
        StoreEvent::PersistFailed {
            kind,
            id,
            action,
            error,
        } => json!({
            "event": "persist_failed",
            "kind": kind.as_str(),
            "id": id,
            "action": action.as_str(),
            "error": error,
        }),
        StoreEvent::QueryResolved { intent, fallback } => {
            let name = if fallback {
                "query_fallback"
            } else {
                "query_resolved"
            };
            json!({ "event": name, "intent": intent.to_string() })
        }
    }
}
