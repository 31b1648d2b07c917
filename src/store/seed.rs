//! Seeded demo dataset: three patient charts, the condition knowledge
//! base and one imaging study per patient.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{ConditionEntry, ImagingStudy, Modality, PatientRecord, VitalsHistory};

use super::RecordStore;

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn labs(entries: &[(&str, &[f64])]) -> BTreeMap<String, Vec<f64>> {
    entries
        .iter()
        .map(|(test, values)| (test.to_string(), values.to_vec()))
        .collect()
}

pub(super) fn demo_dataset() -> RecordStore {
    RecordStore {
        patients: patients(),
        knowledge: knowledge_base(),
        images: imaging_studies(),
    }
}

fn patients() -> HashMap<String, PatientRecord> {
    let records = [
        PatientRecord {
            id: "P001".into(),
            name: "John Doe".into(),
            age: 45,
            gender: "Male".into(),
            conditions: strs(&["Hypertension", "Type 2 Diabetes"]),
            vitals: VitalsHistory {
                heart_rate: vec![75.0, 78.0, 72.0, 76.0, 74.0],
                blood_pressure: strs(&["120/80", "125/82", "118/79", "122/81", "120/78"]),
                temperature: vec![98.6, 98.7, 98.5, 98.6, 98.6],
                oxygen_saturation: vec![98.0, 97.0, 98.0, 99.0, 98.0],
            },
            medications: strs(&["Lisinopril", "Metformin"]),
            lab_results: labs(&[
                ("glucose", &[142.0, 138.0, 145.0]),
                ("hba1c", &[6.8]),
                ("cholesterol", &[210.0]),
            ]),
        },
        PatientRecord {
            id: "P002".into(),
            name: "Jane Smith".into(),
            age: 38,
            gender: "Female".into(),
            conditions: strs(&["Asthma", "Allergic Rhinitis"]),
            vitals: VitalsHistory {
                heart_rate: vec![68.0, 70.0, 67.0, 69.0, 71.0],
                blood_pressure: strs(&["118/75", "120/76", "117/74", "119/75", "121/77"]),
                temperature: vec![98.4, 98.5, 98.3, 98.4, 98.5],
                oxygen_saturation: vec![97.0, 96.0, 97.0, 98.0, 97.0],
            },
            medications: strs(&["Albuterol", "Fluticasone"]),
            lab_results: labs(&[("ige", &[245.0]), ("eosinophils", &[420.0])]),
        },
        PatientRecord {
            id: "P003".into(),
            name: "Robert Johnson".into(),
            age: 62,
            gender: "Male".into(),
            conditions: strs(&["Coronary Artery Disease", "Hyperlipidemia"]),
            vitals: VitalsHistory {
                heart_rate: vec![65.0, 68.0, 64.0, 67.0, 66.0],
                blood_pressure: strs(&["135/85", "138/87", "132/84", "136/86", "134/85"]),
                temperature: vec![98.5, 98.6, 98.4, 98.5, 98.5],
                oxygen_saturation: vec![96.0, 95.0, 96.0, 97.0, 96.0],
            },
            medications: strs(&["Atorvastatin", "Aspirin", "Metoprolol"]),
            lab_results: labs(&[
                ("cholesterol", &[185.0]),
                ("ldl", &[110.0]),
                ("hdl", &[45.0]),
                ("triglycerides", &[150.0]),
            ]),
        },
    ];

    records
        .into_iter()
        .map(|record| (record.id.clone(), record))
        .collect()
}

fn knowledge_base() -> HashMap<String, ConditionEntry> {
    let entries = [
        (
            "Hypertension",
            ConditionEntry {
                description: "High blood pressure condition that can lead to heart disease and stroke.".into(),
                symptoms: strs(&["Headaches", "Shortness of breath", "Nosebleeds"]),
                treatments: strs(&["ACE inhibitors", "Diuretics", "Beta-blockers"]),
                risk_factors: strs(&["Age", "Family history", "High sodium diet", "Obesity"]),
            },
        ),
        (
            "Type 2 Diabetes",
            ConditionEntry {
                description: "Chronic condition affecting how the body metabolizes glucose.".into(),
                symptoms: strs(&[
                    "Increased thirst",
                    "Frequent urination",
                    "Fatigue",
                    "Blurred vision",
                ]),
                treatments: strs(&["Metformin", "Lifestyle changes", "Insulin therapy"]),
                risk_factors: strs(&["Obesity", "Family history", "Age", "Sedentary lifestyle"]),
            },
        ),
        (
            "Asthma",
            ConditionEntry {
                description: "Chronic condition affecting the airways in the lungs.".into(),
                symptoms: strs(&[
                    "Wheezing",
                    "Shortness of breath",
                    "Chest tightness",
                    "Coughing",
                ]),
                treatments: strs(&[
                    "Bronchodilators",
                    "Inhaled corticosteroids",
                    "Leukotriene modifiers",
                ]),
                risk_factors: strs(&[
                    "Allergies",
                    "Family history",
                    "Respiratory infections",
                    "Air pollution",
                ]),
            },
        ),
        (
            "Coronary Artery Disease",
            ConditionEntry {
                description: "Narrowing or blockage of the coronary arteries.".into(),
                symptoms: strs(&["Chest pain", "Shortness of breath", "Fatigue", "Nausea"]),
                treatments: strs(&[
                    "Statins",
                    "Antiplatelet agents",
                    "Beta-blockers",
                    "Lifestyle changes",
                ]),
                risk_factors: strs(&[
                    "High cholesterol",
                    "Hypertension",
                    "Smoking",
                    "Diabetes",
                    "Age",
                ]),
            },
        ),
    ];

    entries
        .into_iter()
        .map(|(name, entry)| (name.to_string(), entry))
        .collect()
}

fn imaging_studies() -> HashMap<String, Vec<ImagingStudy>> {
    let studies = [
        (
            "P001",
            ImagingStudy {
                id: "IMG001".into(),
                modality: Modality::XRay,
                body_part: "Chest".into(),
                date: date(2025, 4, 10),
                findings: "No significant abnormalities detected".into(),
                url: "/static/images/chest_xray.jpg".into(),
            },
        ),
        (
            "P002",
            ImagingStudy {
                id: "IMG002".into(),
                modality: Modality::Mri,
                body_part: "Brain".into(),
                date: date(2025, 3, 22),
                findings: "Normal brain structure, no lesions detected".into(),
                url: "/static/images/brain_mri.jpg".into(),
            },
        ),
        (
            "P003",
            ImagingStudy {
                id: "IMG003".into(),
                modality: Modality::CtScan,
                body_part: "Chest".into(),
                date: date(2025, 5, 1),
                findings: "Mild coronary calcification consistent with CAD diagnosis".into(),
                url: "/static/images/chest_ct.jpg".into(),
            },
        ),
    ];

    studies
        .into_iter()
        .map(|(patient_id, study)| (patient_id.to_string(), vec![study]))
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}
