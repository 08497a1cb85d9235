//! Sweep CLI - carbon accounting from the command line
//!
//! Usage: sweep <COMMAND>
//!
//! Commands:
//!   summary  Show derived totals for tracks, targets and initiatives
//!   ask      Ask Sweepy a question
//!   recalc   Recompute derived values and save the ones that changed
//!   measure  Record a measurement
//!   link     Link targets to an initiative
//!   unlink   Unlink a target from an initiative
//!   init     Write a demo snapshot

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use sweep::presentation::{Cli, Commands};

use commands::measure::MeasureArgs;
use commands::Session;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let session = Session::from_cli(&cli)?;

    match cli.command {
        Commands::Summary => commands::summary::cmd_summary(&session),
        Commands::Ask { question, no_delay } => {
            commands::ask::cmd_ask(&session, &question, no_delay)
        }
        Commands::Recalc { dry_run } => commands::recalc::cmd_recalc(&session, dry_run),
        Commands::Measure {
            track,
            factor,
            quantity,
            supplier,
            date,
            id,
        } => commands::measure::cmd_measure(
            &session,
            MeasureArgs {
                track,
                factor,
                quantity,
                supplier,
                date,
                id,
            },
        ),
        Commands::Link {
            initiative,
            targets,
        } => commands::link::cmd_link(&session, &initiative, &targets),
        Commands::Unlink { initiative, target } => {
            commands::link::cmd_unlink(&session, &initiative, &target)
        }
        Commands::Init { force } => commands::init::cmd_init(&session, force),
    }
}
