//! Query API over the startup roster.

use crate::alert::{Alert, AlertEngine};
use crate::classify::{classify, PatientStatus};
use crate::error::CoreError;
use crate::patient::Patient;
use crate::types::PatientId;

/// Read-only patient lookup and status service.
///
/// Holds the roster loaded at startup; the simulator owns its own copy,
/// so the directory always answers from the initial data.
pub struct PatientDirectory<'a> {
    patients: Vec<Patient>,
    engine: &'a AlertEngine,
}

impl<'a> PatientDirectory<'a> {
    pub fn new(patients: Vec<Patient>, engine: &'a AlertEngine) -> Self {
        Self { patients, engine }
    }

    /// All patients in roster order.
    pub fn all(&self) -> &[Patient] {
        &self.patients
    }

    /// Look up a patient by id. An unknown id is absence, not an error.
    pub fn get(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|patient| patient.id == id)
    }

    /// Case-insensitive substring search over first name, last name and
    /// medical record number. An empty query matches every patient.
    pub fn search(&self, query: &str) -> Vec<&Patient> {
        let needle = query.to_lowercase();
        self.patients
            .iter()
            .filter(|patient| {
                patient.first_name.to_lowercase().contains(&needle)
                    || patient.last_name.to_lowercase().contains(&needle)
                    || patient.medical_record_number.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Derive a patient's current status from their latest vitals.
    pub fn status_of(&self, patient: &Patient) -> Result<PatientStatus, CoreError> {
        let reading = patient
            .vitals
            .latest()
            .ok_or(CoreError::MissingVitals {
                patient: patient.id,
            })?;
        Ok(classify(&reading, patient.age))
    }

    /// All current alerts across the roster, newest first.
    pub fn all_alerts(&self) -> Result<Vec<Alert>, CoreError> {
        self.engine.all_alerts(&self.patients)
    }

    /// Critical alerts only, newest first.
    pub fn critical_alerts(&self) -> Result<Vec<Alert>, CoreError> {
        self.engine.critical_alerts(&self.patients)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::{BloodPressure, PatientVitals};
    use crate::vital::AlertSeverity;

    fn patient(id: PatientId, first: &str, last: &str, mrn: &str, hr: f64) -> Patient {
        Patient {
            id,
            first_name: first.into(),
            last_name: last.into(),
            age: 45,
            medical_record_number: mrn.into(),
            vitals: PatientVitals {
                heart_rate: vec![hr],
                temperature: vec![36.8],
                blood_pressure: vec![BloodPressure {
                    systolic: 120,
                    diastolic: 75,
                }],
                oxygen_saturation: vec![98.0],
            },
        }
    }

    fn roster() -> Vec<Patient> {
        vec![
            patient(1, "Marie", "Dubois", "MRN-2024-001", 72.0),
            patient(2, "Jean", "Martin", "MRN-2024-002", 85.0),
            patient(3, "Sophie", "Bernard", "MRN-2024-003", 160.0),
        ]
    }

    #[test]
    fn get_returns_absence_for_unknown_id() {
        let engine = AlertEngine::new();
        let directory = PatientDirectory::new(roster(), &engine);

        assert!(directory.get(2).is_some());
        assert!(directory.get(404).is_none());
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let engine = AlertEngine::new();
        let directory = PatientDirectory::new(roster(), &engine);

        let by_first = directory.search("mArIe");
        assert_eq!(by_first.len(), 1);
        assert_eq!(by_first[0].id, 1);

        let by_last = directory.search("martin");
        assert_eq!(by_last.len(), 1);
        assert_eq!(by_last[0].id, 2);

        let by_mrn = directory.search("mrn-2024-003");
        assert_eq!(by_mrn.len(), 1);
        assert_eq!(by_mrn[0].id, 3);

        assert!(directory.search("nonexistent").is_empty());
    }

    #[test]
    fn empty_query_matches_everyone() {
        let engine = AlertEngine::new();
        let directory = PatientDirectory::new(roster(), &engine);
        assert_eq!(directory.search("").len(), 3);
    }

    #[test]
    fn status_of_reflects_latest_vitals() {
        let engine = AlertEngine::new();
        let directory = PatientDirectory::new(roster(), &engine);

        let stable = directory.get(1).expect("patient 1 exists");
        assert_eq!(
            directory.status_of(stable).expect("vitals present"),
            PatientStatus::Stable
        );

        let critical = directory.get(3).expect("patient 3 exists");
        assert_eq!(
            directory.status_of(critical).expect("vitals present"),
            PatientStatus::Critical
        );
    }

    #[test]
    fn alert_sweeps_delegate_to_the_engine() {
        let engine = AlertEngine::new();
        let directory = PatientDirectory::new(roster(), &engine);

        let all = directory.all_alerts().expect("vitals present");
        let critical = directory.critical_alerts().expect("vitals present");

        // Patient 2 warns, patient 3 is critical.
        assert_eq!(all.len(), 2);
        assert_eq!(critical.len(), 1);
        assert!(critical
            .iter()
            .all(|alert| alert.severity == AlertSeverity::Critical));
    }
}
