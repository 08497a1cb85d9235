//! Summary command - derived totals at a glance

use anyhow::Result;
use sweep::presentation::output::summary_json;

use super::{emit_json, Session};

pub fn cmd_summary(session: &Session) -> Result<()> {
    let dashboard = session.load_dashboard(session.events())?;

    if session.ui.json {
        emit_json(&summary_json(dashboard.store()));
    } else {
        print!("{}", session.ui.renderer().summary(dashboard.store()));
    }
    Ok(())
}
