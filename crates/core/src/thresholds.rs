//! Age-banded severity thresholds for the classified vitals.
//!
//! Pure logic — no I/O. The caller fetches the latest readings and passes
//! them in. The clinical rules:
//!
//! | Vital          | Band       | Critical          | Warning           |
//! |----------------|------------|-------------------|-------------------|
//! | Heart rate     | age < 18   | <60 or >150       | <80 or >120       |
//! | Heart rate     | 18–64      | <50 or >100       | <60 or >80        |
//! | Heart rate     | age ≥ 65   | <60 or >100       | <70 or >90        |
//! | Temperature    | any        | <29 or >42.6      | <36.3 or >37.5    |
//! | Blood pressure | age ≥ 65   | sys>180 or dia>110| sys>170 or dia>90 |
//! | Blood pressure | age < 65   | sys>160 or dia>100| sys>140 or dia>80 |
//!
//! Temperature's warning band is deliberately not nested inside the
//! non-critical range: a reading between 37.5 and 42.6 reports `warning`,
//! not `critical`. Blood pressure only checks upper bounds; there is no
//! hypotension detection.

use crate::patient::BloodPressure;
use crate::vital::AlertSeverity;

/// Inclusive normal range; values strictly outside it violate the band.
#[derive(Debug, Clone, Copy)]
struct Range {
    min: f64,
    max: f64,
}

impl Range {
    fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Critical and warning heart-rate ranges for an age band.
#[derive(Debug, Clone, Copy)]
struct HeartRateLimits {
    critical: Range,
    warning: Range,
}

fn heart_rate_limits(age: u8) -> HeartRateLimits {
    if age < 18 {
        HeartRateLimits {
            critical: Range {
                min: 60.0,
                max: 150.0,
            },
            warning: Range {
                min: 80.0,
                max: 120.0,
            },
        }
    } else if age >= 65 {
        HeartRateLimits {
            critical: Range {
                min: 60.0,
                max: 100.0,
            },
            warning: Range {
                min: 70.0,
                max: 90.0,
            },
        }
    } else {
        HeartRateLimits {
            critical: Range {
                min: 50.0,
                max: 100.0,
            },
            warning: Range {
                min: 60.0,
                max: 80.0,
            },
        }
    }
}

/// Upper blood-pressure ceilings for an age band (systolic, diastolic).
#[derive(Debug, Clone, Copy)]
struct BloodPressureLimits {
    critical: (u16, u16),
    warning: (u16, u16),
}

fn blood_pressure_limits(age: u8) -> BloodPressureLimits {
    if age >= 65 {
        BloodPressureLimits {
            critical: (180, 110),
            warning: (170, 90),
        }
    } else {
        BloodPressureLimits {
            critical: (160, 100),
            warning: (140, 80),
        }
    }
}

/// Severity of a heart-rate reading for a patient of the given age, or
/// `None` when it sits inside the warning band.
pub fn heart_rate_severity(age: u8, bpm: f64) -> Option<AlertSeverity> {
    let limits = heart_rate_limits(age);
    if !limits.critical.contains(bpm) {
        Some(AlertSeverity::Critical)
    } else if !limits.warning.contains(bpm) {
        Some(AlertSeverity::Warning)
    } else {
        None
    }
}

/// Severity of a temperature reading in °C (age-independent).
pub fn temperature_severity(celsius: f64) -> Option<AlertSeverity> {
    if !(29.0..=42.6).contains(&celsius) {
        Some(AlertSeverity::Critical)
    } else if !(36.3..=37.5).contains(&celsius) {
        Some(AlertSeverity::Warning)
    } else {
        None
    }
}

/// Severity of a blood-pressure reading for a patient of the given age.
/// Only upper bounds are checked.
pub fn blood_pressure_severity(age: u8, bp: BloodPressure) -> Option<AlertSeverity> {
    let limits = blood_pressure_limits(age);
    let exceeds = |(sys, dia): (u16, u16)| bp.systolic > sys || bp.diastolic > dia;

    if exceeds(limits.critical) {
        Some(AlertSeverity::Critical)
    } else if exceeds(limits.warning) {
        Some(AlertSeverity::Warning)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
