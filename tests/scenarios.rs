//! Scenario tests for Sweep.
//!
//! Scenarios drive the library the way a dashboard session would: load,
//! edit, persist, reload, ask.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/valuation_journey.rs"]
mod valuation_journey;

#[path = "scenarios/snapshot_persistence.rs"]
mod snapshot_persistence;

#[path = "scenarios/assistant_session.rs"]
mod assistant_session;
