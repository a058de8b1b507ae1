//! Alert generation.
//!
//! Alerts are derived values: they are recomputed from the current vitals
//! on every evaluation and never stored. The alert id is deterministic
//! (`{vitalType}-{severity}-{patientId}`), so re-evaluating an unchanged
//! patient yields identical ids and consumers can de-duplicate on them.

use chrono::Utc;
use serde::Serialize;

use crate::error::CoreError;
use crate::patient::Patient;
use crate::thresholds::{blood_pressure_severity, heart_rate_severity, temperature_severity};
use crate::types::{PatientId, Timestamp};
use crate::vital::{AlertSeverity, VitalKind};

/// A single threshold violation for one patient vital.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Deterministic id: `{vitalType}-{severity}-{patientId}`.
    pub id: String,
    pub patient_id: PatientId,
    #[serde(rename = "type")]
    pub kind: VitalKind,
    /// French display message, e.g. `"Fréquence cardiaque critique: 160 bpm"`.
    pub message: String,
    pub severity: AlertSeverity,
    pub timestamp: Timestamp,
}

/// Stateless alert oracle, constructed once at startup and passed by
/// reference to consumers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertEngine;

impl AlertEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate one patient's latest reading against the thresholds.
    ///
    /// Each of the three classified vitals contributes at most one alert
    /// (critical wins over warning), so the result holds at most three
    /// alerts. An empty vitals series is a precondition violation and is
    /// reported, not recovered.
    pub fn alerts_for(&self, patient: &Patient) -> Result<Vec<Alert>, CoreError> {
        let reading = patient
            .vitals
            .latest()
            .ok_or(CoreError::MissingVitals {
                patient: patient.id,
            })?;

        // Oxygen saturation is tracked but never classified, so only the
        // three vitals below can alert.
        let checks = [
            (
                VitalKind::HeartRate,
                heart_rate_severity(patient.age, reading.heart_rate),
                format!("{} bpm", reading.heart_rate),
            ),
            (
                VitalKind::Temperature,
                temperature_severity(reading.temperature),
                format!("{}°C", reading.temperature),
            ),
            (
                VitalKind::BloodPressure,
                blood_pressure_severity(patient.age, reading.blood_pressure),
                format!(
                    "{}/{} mmHg",
                    reading.blood_pressure.systolic, reading.blood_pressure.diastolic
                ),
            ),
        ];

        let alerts = checks
            .into_iter()
            .filter_map(|(kind, severity, value)| {
                severity.map(|severity| build_alert(patient.id, kind, severity, value))
            })
            .collect();

        Ok(alerts)
    }

    /// Collect alerts across the whole roster, newest first.
    pub fn all_alerts(&self, patients: &[Patient]) -> Result<Vec<Alert>, CoreError> {
        let mut alerts = Vec::new();
        for patient in patients {
            alerts.extend(self.alerts_for(patient)?);
        }
        sort_newest_first(&mut alerts);
        Ok(alerts)
    }

    /// The critical-only subset of [`all_alerts`](Self::all_alerts).
    pub fn critical_alerts(&self, patients: &[Patient]) -> Result<Vec<Alert>, CoreError> {
        let mut alerts = self.all_alerts(patients)?;
        alerts.retain(|alert| alert.severity == AlertSeverity::Critical);
        Ok(alerts)
    }
}

/// Sort alerts by timestamp, newest first. Stable, so alerts sharing a
/// timestamp keep their evaluation order.
pub fn sort_newest_first(alerts: &mut [Alert]) {
    alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

fn build_alert(
    patient_id: PatientId,
    kind: VitalKind,
    severity: AlertSeverity,
    value: String,
) -> Alert {
    Alert {
        id: format!("{}-{}-{}", kind.as_str(), severity.as_str(), patient_id),
        patient_id,
        kind,
        message: format!("{} {}: {}", kind.label(), severity.label(), value),
        severity,
        timestamp: Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
