//! Calc Use Case
//!
//! Load a snapshot, refuse it on validation errors, then aggregate.

use crate::domain::ports::SnapshotSource;
use crate::domain::services::{calc_cap, CapTable};
use crate::domain::value_objects::UtcDate;
use crate::error::CapTableResult;

use super::options::EngineOptions;
use super::validate::load_validated;

pub struct CalcUseCase<S: SnapshotSource> {
    source: S,
    options: EngineOptions,
}

impl<S: SnapshotSource> CalcUseCase<S> {
    pub fn new(source: S, options: EngineOptions) -> Self {
        Self { source, options }
    }

    /// Cap table as of `as_of`
    pub fn execute(&self, as_of: &UtcDate) -> CapTableResult<CapTable> {
        let snapshot = load_validated(&self.source, &self.options)?;
        let table = calc_cap(&snapshot, as_of);

        tracing::debug!(
            as_of = %as_of,
            rows = table.rows.len(),
            total_fd = table.totals.fd.total_fd,
            "cap table computed"
        );
        Ok(table)
    }
}
