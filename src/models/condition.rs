use serde::{Deserialize, Serialize};

/// Knowledge-base entry for one condition. Keyed by the exact condition
/// name in the record store; unknown names are "no entry", never a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub description: String,
    pub symptoms: Vec<String>,
    pub treatments: Vec<String>,
    pub risk_factors: Vec<String>,
}

/// The four conditions the rule tables know about. Everything keyed per
/// condition (monitoring tips, lifestyle insights, progression templates,
/// anomaly injection) dispatches on this tag instead of comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    Hypertension,
    Type2Diabetes,
    Asthma,
    CoronaryArteryDisease,
}

impl ConditionKind {
    /// Fixed check order used wherever per-condition output is appended.
    pub const ALL: [ConditionKind; 4] = [
        ConditionKind::Hypertension,
        ConditionKind::Type2Diabetes,
        ConditionKind::Asthma,
        ConditionKind::CoronaryArteryDisease,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Hypertension" => Some(ConditionKind::Hypertension),
            "Type 2 Diabetes" => Some(ConditionKind::Type2Diabetes),
            "Asthma" => Some(ConditionKind::Asthma),
            "Coronary Artery Disease" => Some(ConditionKind::CoronaryArteryDisease),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConditionKind::Hypertension => "Hypertension",
            ConditionKind::Type2Diabetes => "Type 2 Diabetes",
            ConditionKind::Asthma => "Asthma",
            ConditionKind::CoronaryArteryDisease => "Coronary Artery Disease",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_round_trips() {
        for kind in ConditionKind::ALL {
            assert_eq!(ConditionKind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn from_name_is_exact_match() {
        assert_eq!(ConditionKind::from_name("hypertension"), None);
        assert_eq!(ConditionKind::from_name("Type 2 diabetes"), None);
        assert_eq!(ConditionKind::from_name("Allergic Rhinitis"), None);
        assert_eq!(ConditionKind::from_name(""), None);
    }
}
