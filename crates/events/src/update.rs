//! Typed payloads published on the simulator's feeds.

use chrono::Utc;
use serde::Serialize;
use wardlight_core::types::Timestamp;
use wardlight_core::{Alert, Patient};

/// Full roster snapshot published after every simulation tick.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterUpdate {
    pub patients: Vec<Patient>,
    pub recorded_at: Timestamp,
}

impl RosterUpdate {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self {
            patients,
            recorded_at: Utc::now(),
        }
    }
}

/// Current critical-alert set published after every simulation tick.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertUpdate {
    pub alerts: Vec<Alert>,
    pub recorded_at: Timestamp,
}

impl AlertUpdate {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self {
            alerts,
            recorded_at: Utc::now(),
        }
    }
}
