//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - In-memory record arena and JSON snapshot loader

pub mod repositories;

// Re-export for convenience
pub use repositories::{CapTableRepository, JsonSnapshotSource};
