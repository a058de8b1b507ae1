//! Pure domain logic for the wardlight patient-monitoring service layer.
//!
//! This crate has no I/O, no async, and no logging — callers feed it
//! patient data and it answers questions about it:
//!
//! - [`thresholds`] — age-banded severity tables for the monitored vitals.
//! - [`classify`] — patient status derivation (`stable` / `watch` / `critical`).
//! - [`alert`] — alert generation with deterministic ids and French messages.
//! - [`directory`] — query API over the startup roster.
//! - [`roster`] — roster document parsing and invariant validation.

pub mod alert;
pub mod classify;
pub mod directory;
pub mod error;
pub mod patient;
pub mod roster;
pub mod thresholds;
pub mod types;
pub mod vital;

pub use alert::{Alert, AlertEngine};
pub use classify::{classify, status_color, PatientStatus};
pub use directory::PatientDirectory;
pub use error::CoreError;
pub use patient::{BloodPressure, Patient, PatientVitals, VitalsReading, VitalsSample};
pub use roster::parse_roster;
pub use vital::{AlertSeverity, VitalKind};
