//! Patient records and vitals time series.
//!
//! Field names serialize in camelCase to match the roster document format.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::PatientId;

/// Number of samples retained per vitals series. Older samples are dropped
/// first (FIFO) when a new one is recorded.
pub const VITALS_WINDOW: usize = 24;

/// A systolic/diastolic blood-pressure reading in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: u16,
    pub diastolic: u16,
}

/// Four parallel vitals series for one patient.
///
/// The series are always appended and trimmed together via [`record`]
/// (`PatientVitals::record`), so they stay the same length; the last
/// element of each is the current reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientVitals {
    pub heart_rate: Vec<f64>,
    pub temperature: Vec<f64>,
    pub blood_pressure: Vec<BloodPressure>,
    pub oxygen_saturation: Vec<f64>,
}

/// The latest reading of the three classified vitals.
///
/// Oxygen saturation is tracked and simulated but never classified, so it
/// does not appear here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalsReading {
    pub heart_rate: f64,
    pub temperature: f64,
    pub blood_pressure: BloodPressure,
}

/// One new observation across all four series, appended atomically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalsSample {
    pub heart_rate: f64,
    pub temperature: f64,
    pub blood_pressure: BloodPressure,
    pub oxygen_saturation: f64,
}

impl PatientVitals {
    /// Number of recorded samples (all series share it once validated).
    pub fn sample_count(&self) -> usize {
        self.heart_rate.len()
    }

    /// Latest reading of the three classified vitals, or `None` when any
    /// series is empty.
    pub fn latest(&self) -> Option<VitalsReading> {
        Some(VitalsReading {
            heart_rate: *self.heart_rate.last()?,
            temperature: *self.temperature.last()?,
            blood_pressure: *self.blood_pressure.last()?,
        })
    }

    /// Latest sample across all four series, or `None` when any series is
    /// empty.
    pub fn latest_sample(&self) -> Option<VitalsSample> {
        Some(VitalsSample {
            heart_rate: *self.heart_rate.last()?,
            temperature: *self.temperature.last()?,
            blood_pressure: *self.blood_pressure.last()?,
            oxygen_saturation: *self.oxygen_saturation.last()?,
        })
    }

    /// Append one sample to all four series, dropping the oldest entries
    /// beyond [`VITALS_WINDOW`].
    pub fn record(&mut self, sample: VitalsSample) {
        self.heart_rate.push(sample.heart_rate);
        self.temperature.push(sample.temperature);
        self.blood_pressure.push(sample.blood_pressure);
        self.oxygen_saturation.push(sample.oxygen_saturation);

        trim_front(&mut self.heart_rate);
        trim_front(&mut self.temperature);
        trim_front(&mut self.blood_pressure);
        trim_front(&mut self.oxygen_saturation);
    }
}

fn trim_front<T>(series: &mut Vec<T>) {
    while series.len() > VITALS_WINDOW {
        series.remove(0);
    }
}

/// A monitored patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub first_name: String,
    pub last_name: String,
    /// Age in years; drives the heart-rate and blood-pressure bands.
    pub age: u8,
    pub medical_record_number: String,
    pub vitals: PatientVitals,
}

/// Validate the roster invariants for a single patient.
///
/// Every series must be non-empty, no longer than [`VITALS_WINDOW`], the
/// same length as its siblings, and blood-pressure components must be
/// positive.
pub fn validate_patient(patient: &Patient) -> Result<(), CoreError> {
    let vitals = &patient.vitals;
    let len = vitals.heart_rate.len();

    if len == 0 {
        return Err(CoreError::Validation(format!(
            "patient {}: vitals series are empty",
            patient.id
        )));
    }

    if vitals.temperature.len() != len
        || vitals.blood_pressure.len() != len
        || vitals.oxygen_saturation.len() != len
    {
        return Err(CoreError::Validation(format!(
            "patient {}: vitals series have unequal lengths",
            patient.id
        )));
    }

    if len > VITALS_WINDOW {
        return Err(CoreError::Validation(format!(
            "patient {}: vitals series exceed the {VITALS_WINDOW}-sample window",
            patient.id
        )));
    }

    if vitals
        .blood_pressure
        .iter()
        .any(|bp| bp.systolic == 0 || bp.diastolic == 0)
    {
        return Err(CoreError::Validation(format!(
            "patient {}: blood-pressure components must be positive",
            patient.id
        )));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    fn vitals(samples: usize) -> PatientVitals {
        PatientVitals {
            heart_rate: vec![72.0; samples],
            temperature: vec![36.8; samples],
            blood_pressure: vec![
                BloodPressure {
                    systolic: 120,
                    diastolic: 80
                };
                samples
            ],
            oxygen_saturation: vec![98.0; samples],
        }
    }

    fn patient(samples: usize) -> Patient {
        Patient {
            id: 1,
            first_name: "Camille".into(),
            last_name: "Roux".into(),
            age: 42,
            medical_record_number: "MRN-2024-001".into(),
            vitals: vitals(samples),
        }
    }

    #[test]
    fn record_appends_to_all_series() {
        let mut v = vitals(3);
        v.record(VitalsSample {
            heart_rate: 75.0,
            temperature: 37.0,
            blood_pressure: BloodPressure {
                systolic: 118,
                diastolic: 79,
            },
            oxygen_saturation: 97.0,
        });

        assert_eq!(v.sample_count(), 4);
        assert_eq!(v.heart_rate.last(), Some(&75.0));
        assert_eq!(v.temperature.last(), Some(&37.0));
        assert_eq!(v.oxygen_saturation.last(), Some(&97.0));
    }

    #[test]
    fn record_drops_oldest_beyond_window() {
        let mut v = vitals(VITALS_WINDOW);
        v.heart_rate[0] = 99.0; // marker for the entry that must fall out

        v.record(VitalsSample {
            heart_rate: 70.0,
            temperature: 36.9,
            blood_pressure: BloodPressure {
                systolic: 121,
                diastolic: 81,
            },
            oxygen_saturation: 96.0,
        });

        assert_eq!(v.sample_count(), VITALS_WINDOW);
        assert_eq!(v.temperature.len(), VITALS_WINDOW);
        assert_eq!(v.blood_pressure.len(), VITALS_WINDOW);
        assert_eq!(v.oxygen_saturation.len(), VITALS_WINDOW);
        assert_ne!(v.heart_rate[0], 99.0);
        assert_eq!(v.heart_rate.last(), Some(&70.0));
    }

    #[test]
    fn latest_returns_last_entries() {
        let mut v = vitals(2);
        v.heart_rate[1] = 88.0;
        v.temperature[1] = 37.3;

        let reading = v.latest().expect("non-empty vitals");
        assert_eq!(reading.heart_rate, 88.0);
        assert_eq!(reading.temperature, 37.3);
    }

    #[test]
    fn latest_is_none_for_empty_series() {
        let v = vitals(0);
        assert!(v.latest().is_none());
        assert!(v.latest_sample().is_none());
    }

    #[test]
    fn validate_rejects_empty_series() {
        let p = patient(0);
        assert_matches!(validate_patient(&p), Err(CoreError::Validation(_)));
    }

    #[test]
    fn validate_rejects_unequal_series() {
        let mut p = patient(3);
        p.vitals.oxygen_saturation.pop();
        assert_matches!(validate_patient(&p), Err(CoreError::Validation(_)));
    }

    #[test]
    fn validate_rejects_overlong_series() {
        let p = patient(VITALS_WINDOW + 1);
        assert_matches!(validate_patient(&p), Err(CoreError::Validation(_)));
    }

    #[test]
    fn validate_rejects_zero_blood_pressure() {
        let mut p = patient(2);
        p.vitals.blood_pressure[0].diastolic = 0;
        assert_matches!(validate_patient(&p), Err(CoreError::Validation(_)));
    }

    #[test]
    fn validate_accepts_well_formed_patient() {
        assert!(validate_patient(&patient(5)).is_ok());
    }

    #[test]
    fn patient_serializes_in_camel_case() {
        let json = serde_json::to_value(patient(1)).expect("serialize");
        assert!(json.get("firstName").is_some());
        assert!(json.get("medicalRecordNumber").is_some());
        assert!(json["vitals"].get("heartRate").is_some());
        assert!(json["vitals"].get("oxygenSaturation").is_some());
    }
}
