//! Progression estimation: one randomized trajectory bundle per
//! condition on the chart, filled from the per-condition templates.

use rand::Rng;

use crate::models::{ConditionKind, PatientRecord};

use super::helpers::now_stamp;
use super::reference;
use super::types::{ExacerbationRisk, InsightError, KeyMetrics, Prediction, Trajectory};

/// Horizon applied to every progression estimate.
const TIME_HORIZON: &str = "6 months";

/// Fallbacks when the relevant series has no readings.
const FALLBACK_BP: &str = "120/80";
const FALLBACK_HBA1C: f64 = 6.8;
const FALLBACK_O2: f64 = 97.0;
const FALLBACK_CHOLESTEROL: f64 = 185.0;

/// One prediction per condition, in chart order. Known conditions get
/// their template risk factors, recommendations and key metrics;
/// unknown conditions carry only the generic fields.
pub fn predict(
    patient: &PatientRecord,
    rng: &mut impl Rng,
) -> Result<Vec<Prediction>, InsightError> {
    if patient.conditions.is_empty() {
        return Err(InsightError::NoConditions);
    }

    let predictions = patient
        .conditions
        .iter()
        .map(|condition| {
            let mut prediction = Prediction {
                condition: condition.clone(),
                time_horizon: TIME_HORIZON.into(),
                prediction_timestamp: now_stamp(),
                confidence: rng.gen_range(0.75..=0.92),
                trajectory: Trajectory::ALL[rng.gen_range(0..Trajectory::ALL.len())],
                risk_factors: Vec::new(),
                key_metrics: None,
                recommendations: Vec::new(),
            };

            if let Some(kind) = ConditionKind::from_name(condition) {
                let template = reference::progression_template(kind);
                prediction.risk_factors =
                    template.risk_factors.iter().map(|s| s.to_string()).collect();
                prediction.recommendations = template
                    .recommendations
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                prediction.key_metrics = Some(key_metrics_for(kind, patient, rng));
            }

            prediction
        })
        .collect();

    Ok(predictions)
}

/// Condition-specific metrics, reading the latest relevant vital or lab
/// value with a fixed fallback when the series is absent.
fn key_metrics_for(
    kind: ConditionKind,
    patient: &PatientRecord,
    rng: &mut impl Rng,
) -> KeyMetrics {
    match kind {
        ConditionKind::Hypertension => KeyMetrics::BloodPressure {
            current_bp: patient
                .vitals
                .blood_pressure
                .last()
                .cloned()
                .unwrap_or_else(|| FALLBACK_BP.into()),
            target_bp: "120/80".into(),
            probability_of_reaching_target: rng.gen_range(0.6..=0.8),
        },
        ConditionKind::Type2Diabetes => KeyMetrics::Glycemic {
            current_hba1c: patient.latest_lab("hba1c").unwrap_or(FALLBACK_HBA1C),
            target_hba1c: "<6.5%".into(),
            probability_of_reaching_target: rng.gen_range(0.5..=0.75),
        },
        ConditionKind::Asthma => KeyMetrics::Respiratory {
            current_o2: patient
                .vitals
                .oxygen_saturation
                .last()
                .copied()
                .unwrap_or(FALLBACK_O2),
            exacerbation_risk: ExacerbationRisk::ALL
                [rng.gen_range(0..ExacerbationRisk::ALL.len())],
            probability_of_exacerbation: rng.gen_range(0.1..=0.4),
        },
        ConditionKind::CoronaryArteryDisease => KeyMetrics::Cardiac {
            current_cholesterol: patient
                .latest_lab("cholesterol")
                .unwrap_or(FALLBACK_CHOLESTEROL),
            target_ldl: "<100 mg/dL".into(),
            probability_of_cardiac_event: rng.gen_range(0.05..=0.2),
        },
    }
}
