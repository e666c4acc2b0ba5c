//! Captable - cap table calculation engine
//!
//! Computes vested option quantities, SAFE conversion prices and share
//! counts, and outstanding / fully-diluted ownership from an immutable
//! snapshot of stakeholders, security classes, issuances, option grants
//! and SAFEs.
//!
//! Layout follows a layered architecture:
//!
//! - `domain` - entities, value objects and the pure calculation services
//! - `application` - use cases that validate, then compute
//! - `infrastructure` - snapshot sources and the in-memory repository
//! - `presentation` - use case wiring for the CLI
//! - `config` - `captable.toml` loading

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CalcUseCase, ConversionPreview, ConvertUseCase, EngineOptions, ValidateUseCase,
    VestingReport, VestingReportUseCase,
};
pub use config::Config;
pub use domain::entities::{
    Issuance, OptionGrant, Safe, SecurityClass, Snapshot, Stakeholder, Vesting,
};
pub use domain::policies::{validate_snapshot, Severity, ValidationIssue, ValidationReport};
pub use domain::ports::SnapshotSource;
pub use domain::services::{
    calc_cap, convert_all_safes, convert_safe, vested_qty, vesting_status, CapTable, CapTableRow,
    CapTableTotals, ConversionReason, SafeConversion, SafeConversionRow, VestingStatus,
};
pub use domain::value_objects::{
    format_utc_date, is_valid_iso_date, months_between, parse_utc_date, SecurityKind, UtcDate,
};
pub use error::{CapTableError, CapTableResult};
pub use infrastructure::{CapTableRepository, JsonSnapshotSource};
