//! SAFE (Simple Agreement for Future Equity) entity

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{SafeId, StakeholderId, UtcDate};

/// A convertible investment that turns into equity at a priced round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Safe {
    pub id: SafeId,
    pub stakeholder_id: StakeholderId,
    /// Invested amount
    pub amount: f64,
    pub date: UtcDate,
    /// Valuation cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cap: Option<f64>,
    /// Multiplier of the round price (0.8 means 20% off)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Post-money cap when true; `None` defers to configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_money: Option<bool>,
}

impl Safe {
    pub fn new(
        id: impl Into<SafeId>,
        stakeholder_id: impl Into<StakeholderId>,
        amount: f64,
        date: UtcDate,
    ) -> Self {
        Self {
            id: id.into(),
            stakeholder_id: stakeholder_id.into(),
            amount,
            date,
            cap: None,
            discount: None,
            post_money: None,
        }
    }

    pub fn with_cap(mut self, cap: f64) -> Self {
        self.cap = Some(cap);
        self
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_post_money(mut self, post_money: bool) -> Self {
        self.post_money = Some(post_money);
        self
    }
}
