//! Vital-sign kinds and alert severities.
//!
//! Wire names (`heartRate`, `critical`, ...) are the dashboard's JSON
//! vocabulary; display labels are the French strings the UI renders.

use serde::{Deserialize, Serialize};

/// One of the four monitored vital signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VitalKind {
    HeartRate,
    Temperature,
    BloodPressure,
    OxygenSaturation,
}

impl VitalKind {
    /// Canonical wire name, used in alert ids and serialized payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            VitalKind::HeartRate => "heartRate",
            VitalKind::Temperature => "temperature",
            VitalKind::BloodPressure => "bloodPressure",
            VitalKind::OxygenSaturation => "oxygenSaturation",
        }
    }

    /// French display label used in alert messages.
    pub fn label(self) -> &'static str {
        match self {
            VitalKind::HeartRate => "Fréquence cardiaque",
            VitalKind::Temperature => "Température",
            VitalKind::BloodPressure => "Tension artérielle",
            VitalKind::OxygenSaturation => "Saturation en oxygène",
        }
    }
}

/// Severity of a threshold violation.
///
/// Ordering matters: `Critical` outranks `Warning` when a patient status
/// is derived from per-vital severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

impl AlertSeverity {
    /// Canonical wire name, used in alert ids and serialized payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
        }
    }

    /// French severity word used in alert messages.
    pub fn label(self) -> &'static str {
        match self {
            AlertSeverity::Warning => "élevée",
            AlertSeverity::Critical => "critique",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
