//! Domain Layer
//!
//! The cap table engine and the records it reads, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Records (Stakeholder, SecurityClass, Issuance, OptionGrant, Safe, Snapshot)
//! - `value_objects/` - Immutable value types (UtcDate, ids, SecurityKind)
//! - `services/` - The calculation engine (vesting, SAFE pricing, aggregation)
//! - `policies/` - Boundary validation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and operate on an immutable snapshot
//! 3. **Ports & Adapters** - Snapshots arrive through the `SnapshotSource` port

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
