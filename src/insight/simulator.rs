//! Vital-sign simulator: bounded jitter over the last recorded vitals,
//! condition-conditioned anomaly injection, threshold alerts.

use rand::Rng;

use crate::models::{ConditionKind, PatientRecord};

use super::helpers::{now_stamp, parse_blood_pressure, round1};
use super::types::{AlertSeverity, InsightError, RealtimeReading, VitalAlert};

/// Physiologically plausible clamp ranges for simulated vitals.
const HEART_RATE_RANGE: (f64, f64) = (40.0, 180.0);
const SYSTOLIC_RANGE: (f64, f64) = (80.0, 200.0);
const DIASTOLIC_RANGE: (f64, f64) = (40.0, 120.0);
const TEMPERATURE_RANGE: (f64, f64) = (95.0, 104.0);
const OXYGEN_RANGE: (f64, f64) = (80.0, 100.0);

/// Simulate the next monitor reading for a patient.
///
/// Each vital gets independent symmetric jitter on its last recorded
/// value. Charts with certain conditions occasionally get an anomaly
/// added on top, before clamping, so the final values always stay
/// inside the documented ranges. Alerts are derived from the final
/// values in fixed order: heart rate, blood pressure, temperature,
/// oxygen.
pub fn simulate_next(
    patient: &PatientRecord,
    rng: &mut impl Rng,
) -> Result<RealtimeReading, InsightError> {
    let vitals = &patient.vitals;
    let (last_hr, last_bp, last_temp, last_o2) = match (
        vitals.heart_rate.last(),
        vitals.blood_pressure.last(),
        vitals.temperature.last(),
        vitals.oxygen_saturation.last(),
    ) {
        (Some(&hr), Some(bp), Some(&temp), Some(&o2)) => (hr, bp, temp, o2),
        _ => return Err(InsightError::MissingVitals(patient.id.clone())),
    };

    let (last_systolic, last_diastolic) = parse_blood_pressure(last_bp)
        .ok_or_else(|| InsightError::MalformedReading(last_bp.clone()))?;

    let mut heart_rate = last_hr + rng.gen_range(-5.0..=5.0);
    let mut systolic = last_systolic + rng.gen_range(-5.0..=5.0);
    let diastolic = last_diastolic + rng.gen_range(-3.0..=3.0);
    let temperature = last_temp + rng.gen_range(-0.3..=0.3);
    let mut oxygen = last_o2 + rng.gen_range(-2.0..=2.0);

    // Anomaly injection per condition, each an independent trial.
    for kind in patient
        .conditions
        .iter()
        .filter_map(|name| ConditionKind::from_name(name))
    {
        match kind {
            ConditionKind::Hypertension => {
                if rng.gen_bool(0.20) {
                    systolic += rng.gen_range(5.0..=15.0);
                }
            }
            ConditionKind::CoronaryArteryDisease => {
                if rng.gen_bool(0.15) {
                    heart_rate += rng.gen_range(10.0..=20.0);
                }
            }
            ConditionKind::Asthma => {
                if rng.gen_bool(0.10) {
                    oxygen -= rng.gen_range(3.0..=8.0);
                }
            }
            ConditionKind::Type2Diabetes => {}
        }
    }

    let heart_rate = round1(heart_rate.clamp(HEART_RATE_RANGE.0, HEART_RATE_RANGE.1));
    let systolic = systolic.clamp(SYSTOLIC_RANGE.0, SYSTOLIC_RANGE.1) as i64;
    let diastolic = diastolic.clamp(DIASTOLIC_RANGE.0, DIASTOLIC_RANGE.1) as i64;
    let temperature = round1(temperature.clamp(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1));
    let oxygen = round1(oxygen.clamp(OXYGEN_RANGE.0, OXYGEN_RANGE.1));

    let mut alerts = Vec::new();
    if heart_rate > 100.0 {
        alerts.push(warning("Elevated heart rate detected"));
    } else if heart_rate < 60.0 {
        alerts.push(warning("Low heart rate detected"));
    }
    if systolic > 140 || diastolic > 90 {
        alerts.push(warning("Elevated blood pressure detected"));
    }
    if temperature > 99.5 {
        alerts.push(warning("Elevated temperature detected"));
    }
    if oxygen < 95.0 {
        alerts.push(VitalAlert {
            severity: AlertSeverity::Danger,
            message: "Low oxygen saturation detected".into(),
        });
    }

    Ok(RealtimeReading {
        timestamp: now_stamp(),
        heart_rate,
        blood_pressure: format!("{systolic}/{diastolic}"),
        temperature,
        oxygen_saturation: oxygen,
        alerts,
    })
}

fn warning(message: &str) -> VitalAlert {
    VitalAlert {
        severity: AlertSeverity::Warning,
        message: message.into(),
    }
}
