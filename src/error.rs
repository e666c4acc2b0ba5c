//! Error types for captable
//!
//! Uses `thiserror` for library errors. The calculation engine itself is
//! total and never returns these; they surface at the boundaries (date
//! parsing, snapshot loading, repository mutation, configuration).

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::RecordRef;

/// Result type alias for captable operations
pub type CapTableResult<T> = Result<T, CapTableError>;

/// Main error type for captable operations
#[derive(Error, Debug)]
pub enum CapTableError {
    /// Date string is neither `YYYY-MM-DD` nor ISO-8601
    #[error("invalid date '{input}' - expected YYYY-MM-DD or ISO-8601")]
    InvalidDate { input: String },

    /// A record failed a field-level check on insert or update
    #[error("invalid {record}: {message}")]
    InvalidRecord { record: RecordRef, message: String },

    /// Reference to a record that does not exist
    #[error("{record} not found")]
    NotFound { record: RecordRef },

    /// Record cannot be removed while other records point at it
    #[error("{record} is still referenced by {referenced_by}")]
    RecordInUse {
        record: RecordRef,
        referenced_by: RecordRef,
    },

    /// Two records of the same kind share an id
    #[error("duplicate id for {record}")]
    DuplicateId { record: RecordRef },

    /// Snapshot failed boundary validation
    #[error("snapshot failed validation with {count} error(s); first: {first}")]
    Validation { count: usize, first: String },

    /// Snapshot file could not be decoded
    #[error("invalid snapshot in {file}: {message}")]
    InvalidSnapshot { file: PathBuf, message: String },

    /// Configuration file could not be decoded
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
