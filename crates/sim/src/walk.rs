//! Bounded random-walk generation of vitals samples.
//!
//! Each tick perturbs the previous value of every series independently
//! and clamps the result to a plausible range. The clamp bounds are
//! looser on the low side than the alert thresholds in
//! `wardlight_core::thresholds` — for example, an elderly patient's heart
//! rate can walk down to 50 while the low-critical threshold sits at 60,
//! and elderly systolic pressure clamps at 180 where critical starts
//! strictly above 180. The asymmetry is intentional: simulated values may
//! rest on a clamp edge without ever reporting a low-side critical.

use rand::Rng;
use wardlight_core::{BloodPressure, VitalsSample};

/// Heart-rate clamp range (bpm) per age band.
fn heart_rate_bounds(age: u8) -> (f64, f64) {
    if age < 18 {
        (60.0, 150.0)
    } else if age >= 65 {
        (50.0, 100.0)
    } else {
        (50.0, 120.0)
    }
}

/// Blood-pressure clamp ranges (systolic, diastolic) per age band.
fn blood_pressure_bounds(age: u8) -> ((f64, f64), (f64, f64)) {
    if age >= 65 {
        ((100.0, 180.0), (60.0, 110.0))
    } else {
        ((90.0, 160.0), (50.0, 100.0))
    }
}

/// Perturb a heart rate by ±10 bpm, rounded and clamped to the age band.
pub fn step_heart_rate(rng: &mut impl Rng, current: f64, age: u8) -> f64 {
    let (min, max) = heart_rate_bounds(age);
    (current + rng.random_range(-10.0..=10.0)).round().clamp(min, max)
}

/// Perturb a temperature by ±0.3 °C, rounded to one decimal. Unclamped:
/// a feverish walk can drift as far as the perturbations take it.
pub fn step_temperature(rng: &mut impl Rng, current: f64) -> f64 {
    ((current + rng.random_range(-0.3..=0.3)) * 10.0).round() / 10.0
}

/// Perturb a blood pressure by ±5/±4 mmHg, rounded and clamped to the
/// age band.
pub fn step_blood_pressure(rng: &mut impl Rng, current: BloodPressure, age: u8) -> BloodPressure {
    let ((sys_min, sys_max), (dia_min, dia_max)) = blood_pressure_bounds(age);

    let systolic = (f64::from(current.systolic) + rng.random_range(-5.0..=5.0))
        .round()
        .clamp(sys_min, sys_max);
    let diastolic = (f64::from(current.diastolic) + rng.random_range(-4.0..=4.0))
        .round()
        .clamp(dia_min, dia_max);

    BloodPressure {
        systolic: systolic as u16,
        diastolic: diastolic as u16,
    }
}

/// Perturb an oxygen saturation by ±1 point, rounded and clamped to
/// [90, 100].
pub fn step_oxygen_saturation(rng: &mut impl Rng, current: f64) -> f64 {
    (current + rng.random_range(-1.0..=1.0))
        .round()
        .clamp(90.0, 100.0)
}

/// Generate the next sample for a patient from their previous one.
pub fn next_sample(rng: &mut impl Rng, previous: &VitalsSample, age: u8) -> VitalsSample {
    VitalsSample {
        heart_rate: step_heart_rate(rng, previous.heart_rate, age),
        temperature: step_temperature(rng, previous.temperature),
        blood_pressure: step_blood_pressure(rng, previous.blood_pressure, age),
        oxygen_saturation: step_oxygen_saturation(rng, previous.oxygen_saturation),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn heart_rate_never_escapes_the_age_band() {
        // Adversarial seeds plus starting values on and beyond the edges.
        for seed in 0..200u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (age, min, max) in [(10u8, 60.0, 150.0), (40, 50.0, 120.0), (70, 50.0, 100.0)] {
                for start in [min, min + 1.0, max - 1.0, max, 0.0, 400.0] {
                    let next = step_heart_rate(&mut rng, start, age);
                    assert!(
                        (min..=max).contains(&next),
                        "hr {next} out of [{min},{max}] for age {age}, start {start}, seed {seed}"
                    );
                    assert_eq!(next, next.round());
                }
            }
        }
    }

    #[test]
    fn blood_pressure_never_escapes_the_age_band() {
        for seed in 0..200u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (age, sys_range, dia_range) in [
                (40u8, 90.0..=160.0, 50.0..=100.0),
                (70, 100.0..=180.0, 60.0..=110.0),
            ] {
                for start in [
                    BloodPressure {
                        systolic: 1,
                        diastolic: 1,
                    },
                    BloodPressure {
                        systolic: 90,
                        diastolic: 50,
                    },
                    BloodPressure {
                        systolic: 180,
                        diastolic: 110,
                    },
                    BloodPressure {
                        systolic: 400,
                        diastolic: 300,
                    },
                ] {
                    let next = step_blood_pressure(&mut rng, start, age);
                    assert!(
                        sys_range.contains(&f64::from(next.systolic)),
                        "systolic {} out of range for age {age}, seed {seed}",
                        next.systolic
                    );
                    assert!(
                        dia_range.contains(&f64::from(next.diastolic)),
                        "diastolic {} out of range for age {age}, seed {seed}",
                        next.diastolic
                    );
                }
            }
        }
    }

    #[test]
    fn oxygen_saturation_stays_within_90_to_100() {
        for seed in 0..200u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            for start in [85.0, 90.0, 95.0, 100.0, 110.0] {
                let next = step_oxygen_saturation(&mut rng, start);
                assert!((90.0..=100.0).contains(&next), "o2 {next} out of range");
                assert_eq!(next, next.round());
            }
        }
    }

    #[test]
    fn temperature_is_rounded_to_one_decimal_and_unclamped() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let next = step_temperature(&mut rng, 36.8);
            assert_eq!((next * 10.0).round() / 10.0, next);
        }

        // No clamp: extreme starting values stay extreme.
        let next = step_temperature(&mut rng, 45.0);
        assert!(next >= 44.7 && next <= 45.3);
    }

    #[test]
    fn temperature_step_is_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let next = step_temperature(&mut rng, 37.0);
            assert!((36.7..=37.3).contains(&next), "temp {next} stepped too far");
        }
    }

    #[test]
    fn identical_seeds_produce_identical_walks() {
        let previous = VitalsSample {
            heart_rate: 72.0,
            temperature: 36.8,
            blood_pressure: BloodPressure {
                systolic: 120,
                diastolic: 75,
            },
            oxygen_saturation: 97.0,
        };

        let mut rng_a = StdRng::seed_from_u64(1234);
        let mut rng_b = StdRng::seed_from_u64(1234);

        for _ in 0..50 {
            let a = next_sample(&mut rng_a, &previous, 40);
            let b = next_sample(&mut rng_b, &previous, 40);
            assert_eq!(a, b);
        }
    }
}
