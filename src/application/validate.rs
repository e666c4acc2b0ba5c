//! Validate Use Case
//!
//! Runs the boundary validator over a snapshot. Also provides the
//! load-then-validate step every computing use case starts with.

use crate::domain::entities::Snapshot;
use crate::domain::policies::{validate_snapshot, ValidationReport};
use crate::domain::ports::SnapshotSource;
use crate::error::CapTableResult;

use super::options::EngineOptions;

/// Validate use case - reports every issue without failing on them
pub struct ValidateUseCase<S: SnapshotSource> {
    source: S,
    options: EngineOptions,
}

impl<S: SnapshotSource> ValidateUseCase<S> {
    pub fn new(source: S, options: EngineOptions) -> Self {
        Self { source, options }
    }

    /// Load the snapshot and validate it. Fails only if loading fails.
    pub fn execute(&self) -> CapTableResult<ValidationReport> {
        let snapshot = self.source.load_snapshot()?;
        let report = check(&snapshot, &self.options);
        tracing::info!(
            source = %self.source.describe(),
            errors = report.error_count(),
            warnings = report.warning_count(),
            "snapshot validated"
        );
        Ok(report)
    }
}

fn check(snapshot: &Snapshot, options: &EngineOptions) -> ValidationReport {
    let report = validate_snapshot(snapshot);
    if options.strict {
        report.promote_warnings()
    } else {
        report
    }
}

/// Load a snapshot and refuse it if validation finds errors.
///
/// Warnings are logged and otherwise ignored (unless strict).
pub(crate) fn load_validated<S: SnapshotSource>(
    source: &S,
    options: &EngineOptions,
) -> CapTableResult<Snapshot> {
    let snapshot = source.load_snapshot()?;
    let report = check(&snapshot, options);
    for warning in report.warnings() {
        tracing::warn!("{warning}");
    }
    report.into_result()?;

    tracing::debug!(
        source = %source.describe(),
        records = snapshot.record_count(),
        "snapshot accepted"
    );
    Ok(snapshot)
}
