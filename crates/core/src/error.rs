use crate::types::PatientId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A patient's vitals series was empty where a latest reading was
    /// required. The roster loader rejects empty series up front, so
    /// hitting this at runtime means a precondition was violated.
    #[error("Patient {patient} has no recorded vitals")]
    MissingVitals { patient: PatientId },

    #[error("Roster document parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
