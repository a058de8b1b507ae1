//! `wardlight-monitor` library crate.
//!
//! Re-exports internal modules for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod config;
pub mod watch;

/// Embedded demo roster used when `ROSTER_PATH` is not set.
pub const DEMO_ROSTER: &str = include_str!("../data/patients.json");

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
