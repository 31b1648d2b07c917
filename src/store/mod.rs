//! In-memory record store.
//!
//! Holds the patient charts, the condition knowledge base and the
//! imaging studies. Built once at startup from the seeded demo dataset
//! and shared behind an `Arc`; nothing writes to it afterwards, so
//! request handlers read it without locking.

mod seed;

use std::collections::HashMap;

use crate::models::{ConditionEntry, ImagingStudy, PatientRecord};

/// Read-only reference data for the whole process.
pub struct RecordStore {
    patients: HashMap<String, PatientRecord>,
    knowledge: HashMap<String, ConditionEntry>,
    images: HashMap<String, Vec<ImagingStudy>>,
}

impl RecordStore {
    /// Build the store with the demo dataset.
    pub fn seed() -> Self {
        seed::demo_dataset()
    }

    /// Look up a patient chart by identifier. Exact match.
    pub fn patient(&self, id: &str) -> Option<&PatientRecord> {
        self.patients.get(id)
    }

    /// All patient charts, sorted by identifier for stable listings.
    pub fn patients(&self) -> Vec<&PatientRecord> {
        let mut all: Vec<&PatientRecord> = self.patients.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Look up a knowledge-base entry by condition name. Exact match;
    /// unknown names are "no entry", never a default.
    pub fn condition(&self, name: &str) -> Option<&ConditionEntry> {
        self.knowledge.get(name)
    }

    /// Imaging studies for a patient. Empty when the patient has none
    /// or is unknown.
    pub fn images_for(&self, patient_id: &str) -> &[ImagingStudy] {
        self.images
            .get(patient_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find a study by identifier across every patient.
    pub fn find_image(&self, image_id: &str) -> Option<&ImagingStudy> {
        self.images
            .values()
            .flat_map(|studies| studies.iter())
            .find(|study| study.id == image_id)
    }
}
