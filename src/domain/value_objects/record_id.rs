//! Record identifiers
//!
//! Each record kind gets its own id newtype so a stakeholder id can never be
//! passed where a security class id is expected. Ids serialize as plain
//! strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kinds of records a cap table holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Stakeholder,
    SecurityClass,
    Issuance,
    OptionGrant,
    Safe,
}

impl RecordKind {
    /// Prefix used when the repository assigns ids (`sh-1`, `og-4`, ...)
    pub fn id_prefix(&self) -> &'static str {
        match self {
            RecordKind::Stakeholder => "sh",
            RecordKind::SecurityClass => "sc",
            RecordKind::Issuance => "is",
            RecordKind::OptionGrant => "og",
            RecordKind::Safe => "safe",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Stakeholder => "stakeholder",
            RecordKind::SecurityClass => "security class",
            RecordKind::Issuance => "issuance",
            RecordKind::OptionGrant => "option grant",
            RecordKind::Safe => "SAFE",
        };
        f.write_str(name)
    }
}

/// A kind plus id, used to point at a record in errors and validation issues
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordRef {
    pub kind: RecordKind,
    pub id: String,
}

impl RecordRef {
    pub fn new(kind: RecordKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.id)
    }
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const KIND: RecordKind = $kind;

            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Point at this record in errors and reports
            pub fn record_ref(&self) -> RecordRef {
                RecordRef::new(Self::KIND, self.0.clone())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

record_id!(
    /// Identifies a stakeholder (founder, employee, investor)
    StakeholderId => RecordKind::Stakeholder
);
record_id!(
    /// Identifies a security class
    SecurityClassId => RecordKind::SecurityClass
);
record_id!(IssuanceId => RecordKind::Issuance);
record_id!(OptionGrantId => RecordKind::OptionGrant);
record_id!(SafeId => RecordKind::Safe);
