//! Terminal concerns of the `sweep` binary

pub mod context;
pub mod error;
pub mod terminal;
