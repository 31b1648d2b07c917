pub mod condition;
pub mod imaging;
pub mod patient;

pub use condition::{ConditionEntry, ConditionKind};
pub use imaging::{ImagingStudy, Modality};
pub use patient::{PatientRecord, VitalsHistory};
