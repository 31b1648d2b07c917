//! Analysis aggregation: condition list, de-duplicated knowledge-base
//! unions, monitoring tips and the synthesized insights in one report.

use std::collections::BTreeSet;

use rand::Rng;

use crate::models::{ConditionKind, PatientRecord};
use crate::store::RecordStore;

use super::helpers::now_stamp;
use super::reference;
use super::synthesizer;
use super::types::AnalysisReport;

/// Build the condition-driven analysis report for a patient chart.
///
/// Risk factors and treatment recommendations are the de-duplicated
/// union over the knowledge-base entries of the patient's conditions;
/// conditions without an entry contribute nothing. Monitoring tips are
/// appended in the fixed condition-check order regardless of chart
/// order.
pub fn analyze(
    patient: &PatientRecord,
    store: &RecordStore,
    rng: &mut impl Rng,
) -> AnalysisReport {
    let mut risk_factors = BTreeSet::new();
    let mut treatments = BTreeSet::new();

    for condition in &patient.conditions {
        if let Some(entry) = store.condition(condition) {
            risk_factors.extend(entry.risk_factors.iter().cloned());
            treatments.extend(entry.treatments.iter().cloned());
        }
    }

    let monitoring: Vec<String> = ConditionKind::ALL
        .into_iter()
        .filter(|&kind| {
            patient
                .conditions
                .iter()
                .any(|name| ConditionKind::from_name(name) == Some(kind))
        })
        .map(|kind| reference::guidance_for(kind).monitoring_tip.to_string())
        .collect();

    let ai_insights = synthesizer::synthesize(patient, rng);

    tracing::info!(
        patient_id = %patient.id,
        conditions = patient.conditions.len(),
        insights = ai_insights.len(),
        "Analysis report assembled"
    );

    AnalysisReport {
        patient_name: patient.name.clone(),
        diagnosis: patient.conditions.clone(),
        risk_factors: risk_factors.into_iter().collect(),
        treatment_recommendations: treatments.into_iter().collect(),
        monitoring_recommendations: monitoring,
        confidence_score: rng.gen_range(0.85..=0.98),
        analysis_timestamp: now_stamp(),
        ai_insights,
    }
}
