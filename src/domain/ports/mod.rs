//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod snapshot_source;

pub use snapshot_source::SnapshotSource;
