//! Link and unlink commands - connect initiatives to targets

use anyhow::Result;
use sweep::domain::entities::Initiative;

use super::{emit_json, Session};

pub fn cmd_link(session: &Session, initiative: &str, targets: &[String]) -> Result<()> {
    let mut dashboard = session.load_dashboard(session.events())?;
    let updated = dashboard.add_targets_to_initiative(initiative, targets)?;
    report(session, &updated)
}

pub fn cmd_unlink(session: &Session, initiative: &str, target: &str) -> Result<()> {
    let mut dashboard = session.load_dashboard(session.events())?;
    let updated = dashboard.remove_target_from_initiative(initiative, target)?;
    report(session, &updated)
}

fn report(session: &Session, initiative: &Initiative) -> Result<()> {
    if session.ui.json {
        emit_json(&serde_json::json!({
            "event": "complete",
            "command": session.command,
            "initiative": initiative.id,
            "target_ids": initiative.target_ids,
            "absolute": initiative.absolute,
        }));
        return Ok(());
    }

    let targets: Vec<&str> = initiative.target_ids.iter().map(String::as_str).collect();
    println!(
        "{} {} now covers {} target(s), impact {:.1} tCO2e",
        session.ui.success_icon(),
        initiative.name,
        targets.len(),
        initiative.absolute
    );
    if !targets.is_empty() {
        println!("  {}", targets.join(", "));
    }
    Ok(())
}
