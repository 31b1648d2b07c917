use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ordered prior readings for the four tracked vital signs.
/// Blood pressure readings are kept as `"systolic/diastolic"` strings,
/// the way monitors report them to the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalsHistory {
    pub heart_rate: Vec<f64>,
    pub blood_pressure: Vec<String>,
    pub temperature: Vec<f64>,
    pub oxygen_saturation: Vec<f64>,
}

/// A patient chart: demographics, recorded vitals, active medications
/// and lab series. Immutable reference data after store seeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub conditions: Vec<String>,
    pub vitals: VitalsHistory,
    pub medications: Vec<String>,
    pub lab_results: BTreeMap<String, Vec<f64>>,
}

impl PatientRecord {
    /// Latest value of a lab series, if any result is recorded.
    pub fn latest_lab(&self, test: &str) -> Option<f64> {
        self.lab_results.get(test).and_then(|series| series.last()).copied()
    }
}
