//! Security kind value object - what a security class represents

use serde::{Deserialize, Serialize};

/// Kind of a security class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityKind {
    /// Common stock
    #[default]
    Common,
    /// Preferred stock
    Preferred,
    /// Reserved capacity for option grants; never counted as issued
    OptionPool,
}

impl SecurityKind {
    /// Returns true for option pool classes
    pub fn is_option_pool(&self) -> bool {
        matches!(self, SecurityKind::OptionPool)
    }
}

impl std::fmt::Display for SecurityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecurityKind::Common => write!(f, "COMMON"),
            SecurityKind::Preferred => write!(f, "PREFERRED"),
            SecurityKind::OptionPool => write!(f, "OPTION_POOL"),
        }
    }
}
