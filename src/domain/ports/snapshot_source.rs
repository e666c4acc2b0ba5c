//! SnapshotSource port - where the engine's input comes from
//!
//! The engine never loads records itself. Anything that can produce a
//! `Snapshot` (the in-memory repository, a JSON file) implements this trait,
//! and the application layer depends only on the trait.

use crate::domain::entities::Snapshot;
use crate::error::CapTableResult;

/// Abstract source of cap table snapshots
pub trait SnapshotSource {
    /// Produce an immutable snapshot of every record
    fn load_snapshot(&self) -> CapTableResult<Snapshot>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

impl SnapshotSource for Snapshot {
    fn load_snapshot(&self) -> CapTableResult<Snapshot> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory snapshot ({} records)", self.record_count())
    }
}
