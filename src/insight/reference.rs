//! Fixed template tables keyed by condition or modality tag. The rule
//! code dispatches on these lookups instead of comparing strings at
//! every call site.

use crate::models::{ConditionKind, Modality};

use super::types::InsightKind;

// ---------------------------------------------------------------------------
// Per-condition guidance
// ---------------------------------------------------------------------------

/// Fixed guidance for a known condition: the monitoring tip appended to
/// analysis reports and the canned insight drawn by the condition rule.
#[derive(Debug, Clone, Copy)]
pub struct ConditionGuidance {
    pub monitoring_tip: &'static str,
    pub insight_kind: InsightKind,
    pub insight_message: &'static str,
    pub insight_confidence: f64,
}

pub fn guidance_for(kind: ConditionKind) -> ConditionGuidance {
    match kind {
        ConditionKind::Hypertension => ConditionGuidance {
            monitoring_tip: "Monitor blood pressure daily",
            insight_kind: InsightKind::Lifestyle,
            insight_message: "Consider DASH diet to help manage hypertension",
            insight_confidence: 0.91,
        },
        ConditionKind::Type2Diabetes => ConditionGuidance {
            monitoring_tip: "Check blood glucose levels regularly",
            insight_kind: InsightKind::Lifestyle,
            insight_message: "Regular physical activity may improve insulin sensitivity",
            insight_confidence: 0.93,
        },
        ConditionKind::Asthma => ConditionGuidance {
            monitoring_tip: "Track peak flow measurements",
            insight_kind: InsightKind::Environmental,
            insight_message: "Monitor air quality index to prevent asthma exacerbations",
            insight_confidence: 0.88,
        },
        ConditionKind::CoronaryArteryDisease => ConditionGuidance {
            monitoring_tip: "Regular ECG monitoring",
            insight_kind: InsightKind::Risk,
            insight_message: "Stress management techniques may reduce cardiovascular risk",
            insight_confidence: 0.85,
        },
    }
}

// ---------------------------------------------------------------------------
// Progression templates
// ---------------------------------------------------------------------------

/// Fixed progression template for a known condition. Key metrics are
/// filled in by the estimator from the patient's latest values.
#[derive(Debug, Clone, Copy)]
pub struct ProgressionTemplate {
    pub risk_factors: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

pub fn progression_template(kind: ConditionKind) -> ProgressionTemplate {
    match kind {
        ConditionKind::Hypertension => ProgressionTemplate {
            risk_factors: &["Sodium intake", "Stress levels", "Medication adherence"],
            recommendations: &[
                "Continue current medication regimen",
                "Reduce sodium intake to <2g per day",
                "Implement stress reduction techniques",
            ],
        },
        ConditionKind::Type2Diabetes => ProgressionTemplate {
            risk_factors: &["Dietary habits", "Physical activity", "Weight management"],
            recommendations: &[
                "Maintain carbohydrate-controlled diet",
                "Increase physical activity to 150 minutes per week",
                "Monitor blood glucose levels daily",
            ],
        },
        ConditionKind::Asthma => ProgressionTemplate {
            risk_factors: &[
                "Environmental triggers",
                "Seasonal allergies",
                "Medication adherence",
            ],
            recommendations: &[
                "Continue current inhaler regimen",
                "Avoid known triggers",
                "Consider allergy testing",
            ],
        },
        ConditionKind::CoronaryArteryDisease => ProgressionTemplate {
            risk_factors: &["Lipid levels", "Blood pressure control", "Physical activity"],
            recommendations: &[
                "Continue statin therapy",
                "Maintain blood pressure control",
                "Cardiac rehabilitation program",
            ],
        },
    }
}

// ---------------------------------------------------------------------------
// Imaging templates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct FindingTemplate {
    pub description: &'static str,
    pub confidence: f64,
    pub location: &'static str,
}

/// Canned findings for one (modality, body part) pair.
#[derive(Debug, Clone, Copy)]
pub struct ImagingTemplate {
    pub findings: &'static [FindingTemplate],
    pub recommendations: &'static [&'static str],
}

/// Template lookup keyed on (modality, body part). Unmatched pairs get
/// no template and are reported with empty findings, not an error.
pub fn imaging_template(modality: Modality, body_part: &str) -> Option<&'static ImagingTemplate> {
    match (modality, body_part) {
        (Modality::XRay, "Chest") => Some(&CHEST_XRAY),
        (Modality::Mri, "Brain") => Some(&BRAIN_MRI),
        (Modality::CtScan, "Chest") => Some(&CHEST_CT),
        _ => None,
    }
}

static CHEST_XRAY: ImagingTemplate = ImagingTemplate {
    findings: &[
        FindingTemplate {
            description: "Lung fields appear clear",
            confidence: 0.95,
            location: "Bilateral lung fields",
        },
        FindingTemplate {
            description: "No evidence of consolidation or effusion",
            confidence: 0.93,
            location: "Bilateral lung fields",
        },
        FindingTemplate {
            description: "Heart size within normal limits",
            confidence: 0.97,
            location: "Cardiac silhouette",
        },
    ],
    recommendations: &[
        "No further imaging required at this time",
        "Recommend follow-up X-ray in 12 months",
    ],
};

static BRAIN_MRI: ImagingTemplate = ImagingTemplate {
    findings: &[
        FindingTemplate {
            description: "No evidence of acute infarction",
            confidence: 0.94,
            location: "Entire brain",
        },
        FindingTemplate {
            description: "No mass effect or midline shift",
            confidence: 0.96,
            location: "Entire brain",
        },
        FindingTemplate {
            description: "Ventricles normal in size and configuration",
            confidence: 0.95,
            location: "Ventricular system",
        },
    ],
    recommendations: &[
        "No further imaging required at this time",
        "Clinical correlation recommended",
    ],
};

static CHEST_CT: ImagingTemplate = ImagingTemplate {
    findings: &[
        FindingTemplate {
            description: "Mild coronary artery calcification",
            confidence: 0.91,
            location: "Coronary arteries",
        },
        FindingTemplate {
            description: "No pulmonary nodules or masses",
            confidence: 0.89,
            location: "Lung parenchyma",
        },
        FindingTemplate {
            description: "No pleural effusion",
            confidence: 0.94,
            location: "Pleural space",
        },
    ],
    recommendations: &[
        "Consider cardiac risk assessment",
        "Follow-up with cardiologist recommended",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_condition_has_guidance() {
        for kind in ConditionKind::ALL {
            let guidance = guidance_for(kind);
            assert!(!guidance.monitoring_tip.is_empty());
            assert!(!guidance.insight_message.is_empty());
            assert!(guidance.insight_confidence > 0.0 && guidance.insight_confidence <= 1.0);
        }
    }

    #[test]
    fn monitoring_tips_match_condition_focus() {
        assert_eq!(
            guidance_for(ConditionKind::Hypertension).monitoring_tip,
            "Monitor blood pressure daily"
        );
        assert_eq!(
            guidance_for(ConditionKind::CoronaryArteryDisease).monitoring_tip,
            "Regular ECG monitoring"
        );
    }

    #[test]
    fn progression_templates_are_populated() {
        for kind in ConditionKind::ALL {
            let template = progression_template(kind);
            assert_eq!(template.risk_factors.len(), 3);
            assert_eq!(template.recommendations.len(), 3);
        }
    }

    #[test]
    fn imaging_template_matches_the_three_known_pairs() {
        assert!(imaging_template(Modality::XRay, "Chest").is_some());
        assert!(imaging_template(Modality::Mri, "Brain").is_some());
        assert!(imaging_template(Modality::CtScan, "Chest").is_some());
    }

    #[test]
    fn imaging_template_unmatched_pairs_are_none() {
        assert!(imaging_template(Modality::Ultrasound, "Abdomen").is_none());
        assert!(imaging_template(Modality::XRay, "Brain").is_none());
        assert!(imaging_template(Modality::Mri, "Chest").is_none());
    }

    #[test]
    fn chest_xray_template_contents() {
        let template = imaging_template(Modality::XRay, "Chest").unwrap();
        assert_eq!(template.findings.len(), 3);
        assert_eq!(template.findings[0].description, "Lung fields appear clear");
        assert_eq!(template.recommendations.len(), 2);
    }
}
