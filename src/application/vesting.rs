//! Vesting Report Use Case

use serde::Serialize;

use crate::domain::ports::SnapshotSource;
use crate::domain::services::{vesting_status, VestingStatus};
use crate::domain::value_objects::UtcDate;
use crate::error::CapTableResult;

use super::options::EngineOptions;
use super::validate::load_validated;

/// Vesting progress of every option grant as of one date
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VestingReport {
    pub as_of: UtcDate,
    pub grants: Vec<VestingStatus>,
    pub total_vested: u64,
    pub total_unvested: u64,
}

pub struct VestingReportUseCase<S: SnapshotSource> {
    source: S,
    options: EngineOptions,
}

impl<S: SnapshotSource> VestingReportUseCase<S> {
    pub fn new(source: S, options: EngineOptions) -> Self {
        Self { source, options }
    }

    /// Grants are reported in snapshot order
    pub fn execute(&self, as_of: &UtcDate) -> CapTableResult<VestingReport> {
        let snapshot = load_validated(&self.source, &self.options)?;
        let grants: Vec<VestingStatus> = snapshot
            .option_grants
            .iter()
            .map(|grant| vesting_status(as_of, grant))
            .collect();

        let total_vested = grants
            .iter()
            .map(|g| g.vested)
            .fold(0u64, u64::saturating_add);
        let total_unvested = grants
            .iter()
            .map(|g| g.unvested)
            .fold(0u64, u64::saturating_add);
        tracing::debug!(as_of = %as_of, grants = grants.len(), total_vested, "vesting computed");

        Ok(VestingReport {
            as_of: *as_of,
            grants,
            total_vested,
            total_unvested,
        })
    }
}
