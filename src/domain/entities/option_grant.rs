//! Option grants and their vesting schedules

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{OptionGrantId, StakeholderId, UtcDate};

/// Cliff plus linear-monthly vesting schedule
///
/// Nothing vests before `cliff_months` whole months have elapsed since
/// `start`; after that the vested fraction is `elapsed / months_total`,
/// reaching the full grant at `months_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vesting {
    pub start: UtcDate,
    pub months_total: u32,
    #[serde(default)]
    pub cliff_months: u32,
}

impl Vesting {
    pub fn new(start: UtcDate, months_total: u32, cliff_months: u32) -> Self {
        Self {
            start,
            months_total,
            cliff_months,
        }
    }

    /// First date on which the cliff is reached
    pub fn cliff_date(&self) -> Option<UtcDate> {
        self.start.whole_months_after(self.cliff_months)
    }

    /// First date on which the grant is fully vested
    pub fn end_date(&self) -> Option<UtcDate> {
        self.start.whole_months_after(self.months_total)
    }
}

/// Options granted to a stakeholder out of the option pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGrant {
    pub id: OptionGrantId,
    pub stakeholder_id: StakeholderId,
    pub quantity: u64,
    pub exercise_price: f64,
    pub grant_date: UtcDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vesting: Option<Vesting>,
}

impl OptionGrant {
    pub fn new(
        id: impl Into<OptionGrantId>,
        stakeholder_id: impl Into<StakeholderId>,
        quantity: u64,
        exercise_price: f64,
        grant_date: UtcDate,
    ) -> Self {
        Self {
            id: id.into(),
            stakeholder_id: stakeholder_id.into(),
            quantity,
            exercise_price,
            grant_date,
            vesting: None,
        }
    }

    pub fn with_vesting(mut self, vesting: Vesting) -> Self {
        self.vesting = Some(vesting);
        self
    }
}
