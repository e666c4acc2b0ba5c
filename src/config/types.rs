//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::UtcDate;
use crate::error::CapTableResult;

use super::loader::{self, ConfigWarning};

/// Calculation defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CalcConfig {
    /// As-of date used when the command line gives none (quoted `"YYYY-MM-DD"`)
    #[serde(default)]
    pub as_of: Option<UtcDate>,
}

/// SAFE conversion defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SafeConfig {
    /// Treat SAFEs without an explicit flag as post-money
    #[serde(default)]
    pub post_money: bool,
}

/// Boundary validation settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValidationConfig {
    /// Promote validation warnings to errors
    #[serde(default)]
    pub strict: bool,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `warn` or `captable=debug`
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub calc: CalcConfig,

    #[serde(default)]
    pub safe: SafeConfig,

    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CapTableResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CapTableResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the config hierarchy: explicit file, project file, user file,
    /// defaults; then environment overrides.
    pub fn resolve(
        explicit: Option<&Path>,
        project_root: &Path,
    ) -> CapTableResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, project_root)
    }

    /// Apply environment variable overrides (CAPTABLE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Configured as-of date, or today in UTC
    pub fn as_of_or_today(&self) -> UtcDate {
        self.calc.as_of.unwrap_or_else(UtcDate::today)
    }
}
