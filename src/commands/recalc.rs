//! Recalc command - bring stored derived values up to date

use anyhow::Result;
use sweep::domain::ports::Record;

use super::{emit_json, Session};

pub fn cmd_recalc(session: &Session, dry_run: bool) -> Result<()> {
    let dashboard = session.load_dashboard(session.events())?;
    let pending = dashboard.pending_derived()?;

    let written = if dry_run {
        0
    } else {
        dashboard.persist_derived()?
    };

    if session.ui.json {
        emit_json(&serde_json::json!({
            "event": "complete",
            "command": "recalc",
            "dry_run": dry_run,
            "stale": pending.len(),
            "written": written,
        }));
        return Ok(());
    }

    let ui = &session.ui;
    if pending.is_empty() {
        println!("{} Derived values are up to date", ui.success_icon());
        return Ok(());
    }

    if dry_run {
        println!("{} stale record(s) would be updated:", pending.len());
    } else {
        println!("{} Updated {} record(s):", ui.success_icon(), written);
    }
    for record in &pending {
        println!("  {}", describe(record));
    }
    Ok(())
}

fn describe(record: &Record) -> String {
    match record {
        Record::Track(t) => format!("track '{}' total {:.1}", t.id, t.total_emissions),
        Record::Target(t) => format!("target '{}' value {:.1}", t.id, t.target_value),
        Record::Initiative(i) => format!("initiative '{}' impact {:.1}", i.id, i.absolute),
        other => format!("{} '{}'", other.kind(), other.id()),
    }
}
