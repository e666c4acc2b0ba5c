//! Snapshot entity - every record the engine sees in one calculation pass
//!
//! A snapshot is an immutable value. The engine only borrows it; record
//! lifecycle lives in the repository layer.

use serde::{Deserialize, Serialize};

use super::{Issuance, OptionGrant, Safe, SecurityClass, Stakeholder};
use crate::domain::value_objects::{SecurityClassId, StakeholderId};

/// All cap table records as of one moment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub stakeholders: Vec<Stakeholder>,
    #[serde(default)]
    pub security_classes: Vec<SecurityClass>,
    #[serde(default)]
    pub issuances: Vec<Issuance>,
    #[serde(default)]
    pub option_grants: Vec<OptionGrant>,
    #[serde(default)]
    pub safes: Vec<Safe>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stakeholder(&self, id: &StakeholderId) -> Option<&Stakeholder> {
        self.stakeholders.iter().find(|s| &s.id == id)
    }

    pub fn security_class(&self, id: &SecurityClassId) -> Option<&SecurityClass> {
        self.security_classes.iter().find(|c| &c.id == id)
    }

    /// Total authorized capacity across all option pool classes
    pub fn pool_authorized(&self) -> u64 {
        self.security_classes
            .iter()
            .filter(|c| c.kind.is_option_pool())
            .fold(0u64, |acc, c| acc.saturating_add(c.authorized))
    }

    /// Number of records of every kind
    pub fn record_count(&self) -> usize {
        self.stakeholders.len()
            + self.security_classes.len()
            + self.issuances.len()
            + self.option_grants.len()
            + self.safes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}
