//! Roster document parsing.
//!
//! The roster is a static JSON document shaped `{"patients": [...]}`,
//! loaded once at process start. Invariants the rest of the crate relies
//! on (non-empty series, equal lengths, bounded window, positive blood
//! pressure) are validated here, at the boundary, so downstream code can
//! treat them as preconditions.

use serde::Deserialize;

use crate::error::CoreError;
use crate::patient::{validate_patient, Patient};

#[derive(Debug, Deserialize)]
struct RosterDocument {
    patients: Vec<Patient>,
}

/// Parse and validate a roster document.
///
/// Malformed input is reported as [`CoreError::Parse`] (bad JSON) or
/// [`CoreError::Validation`] (invariant violation), never silently
/// recovered.
pub fn parse_roster(json: &str) -> Result<Vec<Patient>, CoreError> {
    let document: RosterDocument = serde_json::from_str(json)?;

    for patient in &document.patients {
        validate_patient(patient)?;
    }

    Ok(document.patients)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
