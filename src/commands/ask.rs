//! Ask command - put a question to Sweepy

use std::thread;
use std::time::Duration;

use anyhow::Result;
use sweep::presentation::factory;
use sweep::presentation::output::answer_json;

use super::{emit_json, Session};

pub fn cmd_ask(session: &Session, question: &[String], no_delay: bool) -> Result<()> {
    let events = session.events();
    let dashboard = session.load_dashboard(events.clone())?;
    let assistant = factory::create_assistant(&session.config, events);

    let text = question.join(" ");
    let answer = assistant.ask(dashboard.store(), &text);

    if session.ui.json {
        emit_json(&answer_json(&answer));
        return Ok(());
    }

    let delay = thinking_delay(session.config.assistant.thinking_delay_ms, no_delay);
    if !delay.is_zero() {
        eprint!("Sweepy is thinking…\r");
        thread::sleep(delay);
        eprint!("                   \r");
    }
    print!("{}", session.ui.renderer().answer(&answer));
    Ok(())
}

/// Cosmetic pause before the answer appears
fn thinking_delay(configured_ms: u64, no_delay: bool) -> Duration {
    if no_delay {
        Duration::ZERO
    } else {
        Duration::from_millis(configured_ms)
    }
}
