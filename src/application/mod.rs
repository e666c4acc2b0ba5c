//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Loads snapshots through the `SnapshotSource` port
//!
//! ## Use Cases
//!
//! - `CalcUseCase` - Validate, then aggregate the cap table
//! - `VestingReportUseCase` - Per-grant vesting progress
//! - `ConvertUseCase` - SAFE conversion preview at a priced round
//! - `ValidateUseCase` - Boundary validation report

pub mod calc;
pub mod convert;
pub mod options;
pub mod validate;
pub mod vesting;

pub use calc::CalcUseCase;
pub use convert::{ConversionPreview, ConvertUseCase};
pub use options::EngineOptions;
pub use validate::ValidateUseCase;
pub use vesting::{VestingReport, VestingReportUseCase};
