//! Configuration module for captable
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CAPTABLE_*)
//! 3. Explicit `--config` file, else project config (./captable.toml)
//! 4. User config (<config_dir>/captable/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CalcConfig, Config, LogConfig, SafeConfig, ValidationConfig};
