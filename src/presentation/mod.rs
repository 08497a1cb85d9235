//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Text and JSON renderers for answers and summaries
//!
//! ## Usage
//!
//! ```ignore
//! use sweep::presentation::factory;
//!
//! let events = factory::create_event_sink(false, "summary", 0);
//! let mut dashboard = factory::create_dashboard(&snapshot, &config, events);
//! dashboard.load()?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_assistant, create_dashboard, create_event_sink};
