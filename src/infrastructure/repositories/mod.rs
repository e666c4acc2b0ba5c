//! Repository Implementations
//!
//! Concrete implementations of the `SnapshotSource` port.

mod json;
mod memory;

pub use json::{parse_snapshot, JsonSnapshotSource};
pub use memory::CapTableRepository;
