//! Options shared by every use case

use crate::config::Config;

/// How use cases validate and interpret a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Refuse to compute when the validator reports warnings
    pub strict: bool,
    /// Pre/post-money treatment for SAFEs without an explicit flag
    pub default_post_money: bool,
}

impl From<&Config> for EngineOptions {
    fn from(config: &Config) -> Self {
        Self {
            strict: config.validation.strict,
            default_post_money: config.safe.post_money,
        }
    }
}
