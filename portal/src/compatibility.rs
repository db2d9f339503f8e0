//! Blood compatibility evaluator
//!
//! Red cell donation eligibility (donor → recipients). The relation is
//! asymmetric: O- donates to everyone, AB+ only to AB+.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::blood_type::BloodType;
use BloodType::*;

/// Donor → eligible recipients, in chart order
const DONATION_TABLE: [(BloodType, &[BloodType]); 8] = [
    (ONeg, &[ONeg, OPos, ANeg, APos, BNeg, BPos, AbNeg, AbPos]),
    (OPos, &[OPos, APos, BPos, AbPos]),
    (ANeg, &[ANeg, APos, AbNeg, AbPos]),
    (APos, &[APos, AbPos]),
    (BNeg, &[BNeg, BPos, AbNeg, AbPos]),
    (BPos, &[BPos, AbPos]),
    (AbNeg, &[AbNeg, AbPos]),
    (AbPos, &[AbPos]),
];

static STANDARD: OnceLock<CompatibilityTable> = OnceLock::new();

/// Read-only donor → recipients mapping
#[derive(Debug, Clone)]
pub struct CompatibilityTable {
    recipients: HashMap<BloodType, Vec<BloodType>>,
}

impl CompatibilityTable {
    /// The standard ABO/Rh table, built once on first use
    pub fn standard() -> &'static CompatibilityTable {
        STANDARD.get_or_init(|| Self::from_entries(&DONATION_TABLE))
    }

    fn from_entries(entries: &[(BloodType, &[BloodType])]) -> Self {
        let recipients = entries
            .iter()
            .map(|(donor, to)| (*donor, to.to_vec()))
            .collect();
        Self { recipients }
    }

    /// Whether `donor` may give red cells to `recipient`
    pub fn can_donate(&self, donor: BloodType, recipient: BloodType) -> bool {
        self.recipients
            .get(&donor)
            .map(|to| to.contains(&recipient))
            .unwrap_or(false)
    }

    /// Groups `donor` can donate to
    pub fn recipients_of(&self, donor: BloodType) -> &[BloodType] {
        self.recipients
            .get(&donor)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Groups `recipient` can receive from, in chart order
    pub fn donors_for(&self, recipient: BloodType) -> Vec<BloodType> {
        BloodType::ALL
            .into_iter()
            .filter(|donor| self.can_donate(*donor, recipient))
            .collect()
    }
}

/// Label-based compatibility check.
///
/// Fails closed: a donor or recipient that is not exactly one of the eight
/// table labels is reported as incompatible, never as an error.
pub fn is_compatible(donor: &str, recipient: &str) -> bool {
    match (BloodType::from_label(donor), BloodType::from_label(recipient)) {
        (Some(donor), Some(recipient)) => CompatibilityTable::standard().can_donate(donor, recipient),
        _ => false,
    }
}
