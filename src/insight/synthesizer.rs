//! Insight synthesis: a fixed rule table evaluated in order over one
//! patient chart. Each rule appends at most one insight with a constant
//! confidence; a quiet chart yields an empty list.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{ConditionKind, PatientRecord};

use super::reference;
use super::types::{Insight, InsightKind};

/// Heart-rate level the pattern rule treats as elevated.
const ELEVATED_HEART_RATE: f64 = 85.0;
/// Lab thresholds for the glucose and cholesterol rules.
const GLUCOSE_LIMIT: f64 = 125.0;
const CHOLESTEROL_LIMIT: f64 = 200.0;

pub fn synthesize(patient: &PatientRecord, rng: &mut impl Rng) -> Vec<Insight> {
    let mut insights = Vec::new();

    // Three consecutive elevated heart-rate readings.
    let heart_rate = &patient.vitals.heart_rate;
    if heart_rate.len() >= 3
        && heart_rate[heart_rate.len() - 3..]
            .iter()
            .all(|&value| value > ELEVATED_HEART_RATE)
    {
        insights.push(Insight {
            kind: InsightKind::Pattern,
            message: "Consistently elevated heart rate detected over multiple readings".into(),
            confidence: 0.92,
        });
    }

    if let Some(series) = patient.lab_results.get("glucose") {
        if series.iter().any(|&value| value > GLUCOSE_LIMIT) {
            insights.push(Insight {
                kind: InsightKind::Lab,
                message: "Elevated glucose levels may indicate poor glycemic control".into(),
                confidence: 0.89,
            });
        }
    }

    if let Some(series) = patient.lab_results.get("cholesterol") {
        if series.iter().any(|&value| value > CHOLESTEROL_LIMIT) {
            insights.push(Insight {
                kind: InsightKind::Lab,
                message: "Elevated cholesterol levels detected; consider lipid management therapy"
                    .into(),
                confidence: 0.94,
            });
        }
    }

    if patient.medications.len() >= 2 {
        insights.push(Insight {
            kind: InsightKind::Medication,
            message: format!(
                "Multiple medications detected ({}). Monitor for potential interactions.",
                patient.medications.join(", ")
            ),
            confidence: 0.87,
        });
    }

    // One condition drawn at random gets its canned guidance message.
    // Conditions outside the rule tables contribute nothing here.
    if let Some(condition) = patient.conditions.choose(rng) {
        if let Some(kind) = ConditionKind::from_name(condition) {
            let guidance = reference::guidance_for(kind);
            insights.push(Insight {
                kind: guidance.insight_kind,
                message: guidance.insight_message.into(),
                confidence: guidance.insight_confidence,
            });
        }
    }

    insights
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::models::VitalsHistory;

    use super::*;

    fn quiet_chart() -> PatientRecord {
        PatientRecord {
            id: "P900".into(),
            name: "Test Patient".into(),
            age: 50,
            gender: "Female".into(),
            conditions: vec![],
            vitals: VitalsHistory {
                heart_rate: vec![70.0, 71.0, 69.0],
                blood_pressure: vec!["120/80".into()],
                temperature: vec![98.6],
                oxygen_saturation: vec![98.0],
            },
            medications: vec![],
            lab_results: BTreeMap::new(),
        }
    }

    #[test]
    fn quiet_chart_yields_no_insights() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(synthesize(&quiet_chart(), &mut rng).is_empty());
    }

    #[test]
    fn heart_rate_pattern_boundary_does_not_fire() {
        let mut chart = quiet_chart();
        chart.vitals.heart_rate = vec![86.0, 86.0, 85.0];
        let mut rng = StdRng::seed_from_u64(1);
        let insights = synthesize(&chart, &mut rng);
        assert!(!insights.iter().any(|i| i.kind == InsightKind::Pattern));
    }

    #[test]
    fn heart_rate_pattern_fires_when_last_three_exceed_threshold() {
        let mut chart = quiet_chart();
        chart.vitals.heart_rate = vec![86.0, 86.0, 86.0];
        let mut rng = StdRng::seed_from_u64(1);
        let insights = synthesize(&chart, &mut rng);
        let insight = insights
            .iter()
            .find(|i| i.kind == InsightKind::Pattern)
            .expect("pattern insight");
        assert_eq!(insight.confidence, 0.92);
    }

    #[test]
    fn heart_rate_pattern_looks_only_at_the_last_three() {
        // An early low reading does not block the rule.
        let mut chart = quiet_chart();
        chart.vitals.heart_rate = vec![60.0, 90.0, 91.0, 92.0];
        let mut rng = StdRng::seed_from_u64(1);
        let insights = synthesize(&chart, &mut rng);
        assert!(insights.iter().any(|i| i.kind == InsightKind::Pattern));
    }

    #[test]
    fn pattern_rule_needs_three_readings() {
        let mut chart = quiet_chart();
        chart.vitals.heart_rate = vec![90.0, 91.0];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(synthesize(&chart, &mut rng).is_empty());
    }

    #[test]
    fn glucose_rule_fires_on_any_value_over_limit() {
        let mut chart = quiet_chart();
        chart
            .lab_results
            .insert("glucose".into(), vec![110.0, 126.0, 100.0]);
        let mut rng = StdRng::seed_from_u64(1);
        let insights = synthesize(&chart, &mut rng);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Lab);
        assert_eq!(insights[0].confidence, 0.89);
    }

    #[test]
    fn glucose_rule_boundary_value_does_not_fire() {
        let mut chart = quiet_chart();
        chart.lab_results.insert("glucose".into(), vec![125.0]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(synthesize(&chart, &mut rng).is_empty());
    }

    #[test]
    fn cholesterol_rule_fires_with_its_own_confidence() {
        let mut chart = quiet_chart();
        chart.lab_results.insert("cholesterol".into(), vec![210.0]);
        let mut rng = StdRng::seed_from_u64(1);
        let insights = synthesize(&chart, &mut rng);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].confidence, 0.94);
        assert!(insights[0].message.contains("cholesterol"));
    }

    #[test]
    fn medication_rule_lists_every_medication() {
        let mut chart = quiet_chart();
        chart.medications = vec!["Lisinopril".into(), "Metformin".into()];
        let mut rng = StdRng::seed_from_u64(1);
        let insights = synthesize(&chart, &mut rng);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Medication);
        assert!(insights[0].message.contains("Lisinopril, Metformin"));
    }

    #[test]
    fn single_medication_does_not_fire_the_interaction_rule() {
        let mut chart = quiet_chart();
        chart.medications = vec!["Lisinopril".into()];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(synthesize(&chart, &mut rng).is_empty());
    }

    #[test]
    fn condition_rule_emits_the_canned_guidance() {
        let mut chart = quiet_chart();
        chart.conditions = vec!["Asthma".into()];
        let mut rng = StdRng::seed_from_u64(1);
        let insights = synthesize(&chart, &mut rng);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Environmental);
        assert_eq!(
            insights[0].message,
            "Monitor air quality index to prevent asthma exacerbations"
        );
        assert_eq!(insights[0].confidence, 0.88);
    }

    #[test]
    fn unknown_condition_yields_nothing_from_the_condition_rule() {
        let mut chart = quiet_chart();
        chart.conditions = vec!["Allergic Rhinitis".into()];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(synthesize(&chart, &mut rng).is_empty());
    }

    #[test]
    fn condition_rule_draws_each_known_condition_eventually() {
        let mut chart = quiet_chart();
        chart.conditions = vec!["Hypertension".into(), "Type 2 Diabetes".into()];
        let mut rng = StdRng::seed_from_u64(21);
        let mut messages = std::collections::BTreeSet::new();
        for _ in 0..200 {
            for insight in synthesize(&chart, &mut rng) {
                messages.insert(insight.message);
            }
        }
        assert!(messages.contains("Consider DASH diet to help manage hypertension"));
        assert!(messages.contains("Regular physical activity may improve insulin sensitivity"));
    }

    #[test]
    fn rules_append_in_fixed_order() {
        let mut chart = quiet_chart();
        chart.vitals.heart_rate = vec![90.0, 91.0, 92.0];
        chart.lab_results.insert("glucose".into(), vec![130.0]);
        chart.lab_results.insert("cholesterol".into(), vec![210.0]);
        chart.medications = vec!["Lisinopril".into(), "Metformin".into()];
        chart.conditions = vec!["Hypertension".into()];
        let mut rng = StdRng::seed_from_u64(1);
        let kinds: Vec<InsightKind> = synthesize(&chart, &mut rng)
            .iter()
            .map(|i| i.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::Pattern,
                InsightKind::Lab,
                InsightKind::Lab,
                InsightKind::Medication,
                InsightKind::Lifestyle,
            ]
        );
    }
}
