//! The insight core: vital-sign simulation, rule-table insight
//! synthesis, analysis aggregation, progression estimation and imaging
//! findings. Every operation is a pure, synchronous computation over the
//! immutable record store plus an injected random source; outputs are
//! ephemeral and never written back.

pub mod analysis;
pub mod helpers;
pub mod imaging;
pub mod progression;
pub mod reference;
pub mod simulator;
pub mod synthesizer;
pub mod types;

pub use analysis::analyze;
pub use imaging::synthesize_findings;
pub use progression::predict;
pub use simulator::simulate_next;
pub use synthesizer::synthesize;
pub use types::InsightError;
