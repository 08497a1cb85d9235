//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --snapshot) are inherited by all subcommands
//! - Every command loads the snapshot, works on the in-memory store, and
//!   writes changes back through the repository

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Sweep - carbon accounting from the command line
#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'sweep init' to create a demo snapshot.")]
pub struct Cli {
    /// Output format for CI (NDJSON events plus a JSON result)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Snapshot file (defaults to .sweep/snapshot.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show tracks, targets and initiatives with their derived values
    Summary,

    /// Ask Sweepy a question about your emissions
    Ask {
        /// The question, e.g. "which supplier emits the most?"
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Answer immediately, ignoring the configured thinking delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Recompute derived values and save any that changed
    Recalc {
        /// Report what would change without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Record a measurement
    Measure {
        /// Track the measurement belongs to
        #[arg(long)]
        track: String,

        /// Emission factor used to convert the quantity
        #[arg(long)]
        factor: String,

        /// Activity quantity in the factor's unit
        #[arg(long, allow_negative_numbers = true)]
        quantity: f64,

        /// Supplier the activity was bought from
        #[arg(long)]
        supplier: Option<String>,

        /// Activity date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Measurement id (generated when omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Link targets to an initiative
    Link {
        /// Initiative id
        initiative: String,

        /// Target ids
        #[arg(required = true, num_args = 1..)]
        targets: Vec<String>,
    },

    /// Unlink a target from an initiative
    Unlink {
        /// Initiative id
        initiative: String,

        /// Target id
        target: String,
    },

    /// Write a demo snapshot
    Init {
        /// Overwrite an existing snapshot
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Summary => "summary",
            Commands::Ask { .. } => "ask",
            Commands::Recalc { .. } => "recalc",
            Commands::Measure { .. } => "measure",
            Commands::Link { .. } => "link",
            Commands::Unlink { .. } => "unlink",
            Commands::Init { .. } => "init",
        }
    }
}
