use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Imaging modality. Wire labels match the dashboard's display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    #[serde(rename = "X-Ray")]
    XRay,
    #[serde(rename = "MRI")]
    Mri,
    #[serde(rename = "CT Scan")]
    CtScan,
    #[serde(rename = "Ultrasound")]
    Ultrasound,
}

impl Modality {
    pub fn as_str(self) -> &'static str {
        match self {
            Modality::XRay => "X-Ray",
            Modality::Mri => "MRI",
            Modality::CtScan => "CT Scan",
            Modality::Ultrasound => "Ultrasound",
        }
    }
}

/// One imaging study. Owned by a single patient in the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagingStudy {
    pub id: String,
    #[serde(rename = "type")]
    pub modality: Modality,
    pub body_part: String,
    pub date: NaiveDate,
    pub findings: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modality_serializes_to_display_label() {
        let json = serde_json::to_value(Modality::CtScan).unwrap();
        assert_eq!(json, "CT Scan");
        let json = serde_json::to_value(Modality::XRay).unwrap();
        assert_eq!(json, "X-Ray");
    }

    #[test]
    fn study_serializes_modality_as_type() {
        let study = ImagingStudy {
            id: "IMG001".into(),
            modality: Modality::XRay,
            body_part: "Chest".into(),
            date: NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
            findings: "No significant abnormalities detected".into(),
            url: "/static/images/chest_xray.jpg".into(),
        };
        let json = serde_json::to_value(&study).unwrap();
        assert_eq!(json["type"], "X-Ray");
        assert_eq!(json["date"], "2025-04-10");
        assert!(json.get("modality").is_none());
    }
}
