//! Monitor configuration loaded from environment variables.

use std::path::PathBuf;

/// Default simulation tick period in seconds.
pub const DEFAULT_TICK_SECS: u64 = 60;

/// Runtime configuration for the monitor binary.
///
/// All fields have defaults suitable for a local demo run.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Path to a roster JSON document. When unset, the embedded demo
    /// roster is used.
    pub roster_path: Option<PathBuf>,
    /// Simulation tick period in seconds (default: `60`).
    pub tick_secs: u64,
    /// Fixed RNG seed for reproducible simulation runs. When unset, the
    /// simulator seeds from OS entropy.
    pub seed: Option<u64>,
}

impl MonitorConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var       | Default                  |
    /// |---------------|--------------------------|
    /// | `ROSTER_PATH` | (embedded demo roster)   |
    /// | `TICK_SECS`   | `60`                     |
    /// | `SIM_SEED`    | (OS entropy)             |
    pub fn from_env() -> Self {
        let roster_path = std::env::var("ROSTER_PATH").ok().map(PathBuf::from);

        let tick_secs: u64 = std::env::var("TICK_SECS")
            .unwrap_or_else(|_| DEFAULT_TICK_SECS.to_string())
            .parse()
            .expect("TICK_SECS must be a valid u64");

        let seed: Option<u64> = std::env::var("SIM_SEED")
            .ok()
            .map(|v| v.parse().expect("SIM_SEED must be a valid u64"));

        Self {
            roster_path,
            tick_secs,
            seed,
        }
    }
}
