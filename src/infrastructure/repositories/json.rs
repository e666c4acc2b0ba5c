//! JSON Snapshot Source
//!
//! Reads a cap table snapshot from a JSON file. Read-only: nothing here
//! ever writes back.
//!
//! ```json
//! {
//!   "stakeholders": [{ "id": "founder", "name": "Founder" }],
//!   "securityClasses": [{ "id": "common", "name": "Common", "kind": "COMMON",
//!                         "authorized": 10000000 }],
//!   "issuances": [{ "id": "is-1", "stakeholderId": "founder", "securityClassId": "common",
//!                   "quantity": 7000000, "date": "2024-01-01" }],
//!   "optionGrants": [],
//!   "safes": []
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::Snapshot;
use crate::domain::ports::SnapshotSource;
use crate::error::{CapTableError, CapTableResult};

/// Snapshot stored as a JSON file
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    path: PathBuf,
}

impl JsonSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Decode a snapshot from JSON text; `file` is only used in errors
pub fn parse_snapshot(content: &str, file: &Path) -> CapTableResult<Snapshot> {
    serde_json::from_str(content).map_err(|e| CapTableError::InvalidSnapshot {
        file: file.to_path_buf(),
        message: e.to_string(),
    })
}

impl SnapshotSource for JsonSnapshotSource {
    fn load_snapshot(&self) -> CapTableResult<Snapshot> {
        let content = fs::read_to_string(&self.path)?;
        let snapshot = parse_snapshot(&content, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            records = snapshot.record_count(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        format!("JSON snapshot {}", self.path.display())
    }
}
