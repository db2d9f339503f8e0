//! Blood type value object
//!
//! The eight ABO/Rh groups. Labels use ASCII signs ("O-", "AB+").

use serde::{Deserialize, Serialize};

/// ABO/Rh blood group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BloodType {
    ONeg,
    OPos,
    ANeg,
    APos,
    BNeg,
    BPos,
    AbNeg,
    AbPos,
}

impl BloodType {
    /// All groups in chart order
    pub const ALL: [BloodType; 8] = [
        BloodType::ONeg,
        BloodType::OPos,
        BloodType::ANeg,
        BloodType::APos,
        BloodType::BNeg,
        BloodType::BPos,
        BloodType::AbNeg,
        BloodType::AbPos,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BloodType::ONeg => "O-",
            BloodType::OPos => "O+",
            BloodType::ANeg => "A-",
            BloodType::APos => "A+",
            BloodType::BNeg => "B-",
            BloodType::BPos => "B+",
            BloodType::AbNeg => "AB-",
            BloodType::AbPos => "AB+",
        }
    }
}

impl BloodType {
    /// Exact label lookup: `"AB+"`, or `"AB\u{2212}"` with the Unicode minus.
    /// No trimming or case folding.
    pub fn from_label(label: &str) -> Option<BloodType> {
        let label = label.replace('\u{2212}', "-");
        BloodType::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl std::fmt::Display for BloodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for BloodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the Unicode minus sign as well as '-'
        let normalized = s.trim().to_uppercase().replace('\u{2212}', "-");
        match normalized.as_str() {
            "O-" => Ok(BloodType::ONeg),
            "O+" => Ok(BloodType::OPos),
            "A-" => Ok(BloodType::ANeg),
            "A+" => Ok(BloodType::APos),
            "B-" => Ok(BloodType::BNeg),
            "B+" => Ok(BloodType::BPos),
            "AB-" => Ok(BloodType::AbNeg),
            "AB+" => Ok(BloodType::AbPos),
            _ => Err(format!("Unknown blood type: {}", s)),
        }
    }
}

impl TryFrom<String> for BloodType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BloodType> for String {
    fn from(value: BloodType) -> Self {
        value.label().to_string()
    }
}
