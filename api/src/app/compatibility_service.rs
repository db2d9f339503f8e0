//! Compatibility service
//!
//! Serves the donation chart and single-pair checks over the static
//! red-cell compatibility table.

use std::collections::BTreeMap;

use serde::Serialize;

use bloodlink_portal::{is_compatible, BloodType, CompatibilityTable};

/// One row of the chart, keyed by the blood type it describes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    pub can_donate_to: Vec<BloodType>,
    pub can_receive_from: Vec<BloodType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityCheck {
    pub donor: String,
    pub recipient: String,
    pub compatible: bool,
}

pub struct CompatibilityService {
    table: &'static CompatibilityTable,
}

impl Default for CompatibilityService {
    fn default() -> Self {
        Self::new()
    }
}

impl CompatibilityService {
    pub fn new() -> Self {
        Self {
            table: CompatibilityTable::standard(),
        }
    }

    pub fn chart(&self) -> BTreeMap<&'static str, ChartEntry> {
        BloodType::ALL
            .iter()
            .map(|&blood_type| {
                let entry = ChartEntry {
                    can_donate_to: self.table.recipients_of(blood_type).to_vec(),
                    can_receive_from: self.table.donors_for(blood_type),
                };
                (blood_type.label(), entry)
            })
            .collect()
    }

    /// Labels are echoed back as given; anything outside the eight known
    /// types is incompatible.
    pub fn check(&self, donor: &str, recipient: &str) -> CompatibilityCheck {
        let compatible = is_compatible(donor, recipient);
        tracing::debug!(donor, recipient, compatible, "compatibility check");
        CompatibilityCheck {
            donor: donor.to_string(),
            recipient: recipient.to_string(),
            compatible,
        }
    }
}
