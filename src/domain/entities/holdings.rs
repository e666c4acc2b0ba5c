//! Stakeholders, security classes and share issuances

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    IssuanceId, SecurityClassId, SecurityKind, StakeholderId, UtcDate,
};

/// A person or entity that can hold equity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stakeholder {
    pub id: StakeholderId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Stakeholder {
    pub fn new(id: impl Into<StakeholderId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// A class of securities with an authorized share count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityClass {
    pub id: SecurityClassId,
    pub name: String,
    pub kind: SecurityKind,
    pub authorized: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par_value: Option<f64>,
}

impl SecurityClass {
    pub fn new(
        id: impl Into<SecurityClassId>,
        name: impl Into<String>,
        kind: SecurityKind,
        authorized: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            authorized,
            par_value: None,
        }
    }

    pub fn with_par_value(mut self, par_value: f64) -> Self {
        self.par_value = Some(par_value);
        self
    }
}

/// Shares of a security class issued to a stakeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issuance {
    pub id: IssuanceId,
    pub stakeholder_id: StakeholderId,
    pub security_class_id: SecurityClassId,
    pub quantity: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_share: Option<f64>,
    pub date: UtcDate,
}

impl Issuance {
    pub fn new(
        id: impl Into<IssuanceId>,
        stakeholder_id: impl Into<StakeholderId>,
        security_class_id: impl Into<SecurityClassId>,
        quantity: u64,
        date: UtcDate,
    ) -> Self {
        Self {
            id: id.into(),
            stakeholder_id: stakeholder_id.into(),
            security_class_id: security_class_id.into(),
            quantity,
            price_per_share: None,
            date,
        }
    }

    pub fn with_price_per_share(mut self, price: f64) -> Self {
        self.price_per_share = Some(price);
        self
    }
}
