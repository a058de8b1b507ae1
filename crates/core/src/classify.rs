//! Patient status derivation.
//!
//! A status is always computed fresh from the latest vitals; it is never
//! stored on the patient.

use serde::{Deserialize, Serialize};

use crate::patient::VitalsReading;
use crate::thresholds::{blood_pressure_severity, heart_rate_severity, temperature_severity};
use crate::vital::AlertSeverity;

/// Derived patient condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Stable,
    Watch,
    Critical,
}

impl PatientStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PatientStatus::Stable => "stable",
            PatientStatus::Watch => "watch",
            PatientStatus::Critical => "critical",
        }
    }
}

/// Classify a patient from their latest reading.
///
/// All three vitals are evaluated every time: any critical vital yields
/// `Critical`, otherwise any warning vital yields `Watch`, otherwise
/// `Stable`.
pub fn classify(reading: &VitalsReading, age: u8) -> PatientStatus {
    let severities = [
        heart_rate_severity(age, reading.heart_rate),
        temperature_severity(reading.temperature),
        blood_pressure_severity(age, reading.blood_pressure),
    ];

    match severities.into_iter().flatten().max() {
        Some(AlertSeverity::Critical) => PatientStatus::Critical,
        Some(AlertSeverity::Warning) => PatientStatus::Watch,
        None => PatientStatus::Stable,
    }
}

/// UI color code for a status; `None` (patient unknown) maps to gray.
pub fn status_color(status: Option<PatientStatus>) -> &'static str {
    match status {
        Some(PatientStatus::Stable) => "green",
        Some(PatientStatus::Watch) => "yellow",
        Some(PatientStatus::Critical) => "red",
        None => "gray",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
