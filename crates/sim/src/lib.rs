//! Vitals simulation engine.
//!
//! - [`walk`] — bounded random-walk steps for each vital series.
//! - [`simulator`] — the tick engine: mutates the roster, then publishes
//!   roster and critical-alert updates to subscribers.

pub mod simulator;
pub mod walk;

pub use simulator::{AlertSource, VitalsSimulator, DEFAULT_TICK_PERIOD};
