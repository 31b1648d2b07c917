use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Vital alerts
// ---------------------------------------------------------------------------

/// Severity determines how the dashboard surfaces a vital alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Danger,
}

impl AlertSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertSeverity::Warning => "warning",
            AlertSeverity::Danger => "danger",
        }
    }
}

/// One threshold crossing derived from a simulated reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalAlert {
    #[serde(rename = "type")]
    pub severity: AlertSeverity,
    pub message: String,
}

// ---------------------------------------------------------------------------
// RealtimeReading
// ---------------------------------------------------------------------------

/// One simulated monitor reading. Created fresh per request and never
/// written back into the patient chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeReading {
    pub timestamp: String,
    pub heart_rate: f64,
    pub blood_pressure: String,
    pub temperature: f64,
    pub oxygen_saturation: f64,
    pub alerts: Vec<VitalAlert>,
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Pattern,
    Lab,
    Medication,
    Lifestyle,
    Environmental,
    Risk,
}

impl InsightKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InsightKind::Pattern => "pattern",
            InsightKind::Lab => "lab",
            InsightKind::Medication => "medication",
            InsightKind::Lifestyle => "lifestyle",
            InsightKind::Environmental => "environmental",
            InsightKind::Risk => "risk",
        }
    }
}

/// A single rule-triggered observation with its fixed confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub message: String,
    pub confidence: f64,
}

// ---------------------------------------------------------------------------
// AnalysisReport
// ---------------------------------------------------------------------------

/// Condition-driven analysis bundle for one patient chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub patient_name: String,
    pub diagnosis: Vec<String>,
    pub risk_factors: Vec<String>,
    pub treatment_recommendations: Vec<String>,
    pub monitoring_recommendations: Vec<String>,
    pub confidence_score: f64,
    pub analysis_timestamp: String,
    pub ai_insights: Vec<Insight>,
}

// ---------------------------------------------------------------------------
// Progression predictions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trajectory {
    Stable,
    Improving,
    Worsening,
}

impl Trajectory {
    pub const ALL: [Trajectory; 3] =
        [Trajectory::Stable, Trajectory::Improving, Trajectory::Worsening];

    pub fn as_str(self) -> &'static str {
        match self {
            Trajectory::Stable => "stable",
            Trajectory::Improving => "improving",
            Trajectory::Worsening => "worsening",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExacerbationRisk {
    Low,
    Moderate,
    High,
}

impl ExacerbationRisk {
    pub const ALL: [ExacerbationRisk; 3] = [
        ExacerbationRisk::Low,
        ExacerbationRisk::Moderate,
        ExacerbationRisk::High,
    ];
}

/// Condition-specific metric block inside a progression prediction.
/// Serialized untagged: each variant carries its own field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyMetrics {
    BloodPressure {
        current_bp: String,
        target_bp: String,
        probability_of_reaching_target: f64,
    },
    Glycemic {
        current_hba1c: f64,
        target_hba1c: String,
        probability_of_reaching_target: f64,
    },
    Respiratory {
        current_o2: f64,
        exacerbation_risk: ExacerbationRisk,
        probability_of_exacerbation: f64,
    },
    Cardiac {
        current_cholesterol: f64,
        target_ldl: String,
        probability_of_cardiac_event: f64,
    },
}

/// One trajectory/confidence/recommendation bundle for a condition.
/// Unknown conditions carry only the generic fields: empty risk factors
/// and recommendations, no key metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub condition: String,
    pub time_horizon: String,
    pub prediction_timestamp: String,
    pub confidence: f64,
    pub trajectory: Trajectory,
    pub risk_factors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_metrics: Option<KeyMetrics>,
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Imaging reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagingFinding {
    pub description: String,
    pub confidence: f64,
    pub location: String,
}

/// Simulated analysis of one imaging study. Unmatched modality/body-part
/// pairs yield empty findings and recommendations, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagingReport {
    pub image_id: String,
    pub analysis_timestamp: String,
    pub confidence_score: f64,
    pub findings: Vec<ImagingFinding>,
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// InsightError
// ---------------------------------------------------------------------------

/// Errors surfaced by the insight core. Every failure is local to one
/// request and reported as data, never as a crash.
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("No recorded vitals for patient {0}")]
    MissingVitals(String),

    #[error("Malformed blood pressure reading: {0}")]
    MalformedReading(String),

    #[error("No conditions to predict progression for")]
    NoConditions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_serializes_severity_as_type() {
        let alert = VitalAlert {
            severity: AlertSeverity::Danger,
            message: "Low oxygen saturation detected".into(),
        };
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["type"], "danger");
        assert_eq!(json["message"], "Low oxygen saturation detected");
    }

    #[test]
    fn insight_serializes_kind_as_type() {
        let insight = Insight {
            kind: InsightKind::Pattern,
            message: "Consistently elevated heart rate detected over multiple readings".into(),
            confidence: 0.92,
        };
        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["type"], "pattern");
        assert_eq!(json["confidence"], 0.92);
    }

    #[test]
    fn key_metrics_variants_carry_their_own_fields() {
        let metrics = KeyMetrics::Respiratory {
            current_o2: 97.0,
            exacerbation_risk: ExacerbationRisk::Moderate,
            probability_of_exacerbation: 0.2,
        };
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["current_o2"], 97.0);
        assert_eq!(json["exacerbation_risk"], "moderate");
        assert!(json.get("current_bp").is_none());
    }

    #[test]
    fn prediction_without_key_metrics_omits_the_field() {
        let prediction = Prediction {
            condition: "Unknown".into(),
            time_horizon: "6 months".into(),
            prediction_timestamp: "2025-06-01 12:00:00".into(),
            confidence: 0.8,
            trajectory: Trajectory::Stable,
            risk_factors: vec![],
            key_metrics: None,
            recommendations: vec![],
        };
        let json = serde_json::to_value(&prediction).unwrap();
        assert!(json.get("key_metrics").is_none());
        assert_eq!(json["trajectory"], "stable");
    }

    #[test]
    fn insight_error_messages() {
        assert_eq!(
            InsightError::MissingVitals("P001".into()).to_string(),
            "No recorded vitals for patient P001"
        );
        assert_eq!(
            InsightError::NoConditions.to_string(),
            "No conditions to predict progression for"
        );
    }
}
