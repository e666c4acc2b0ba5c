//! Domain Entities
//!
//! Records with identity. The engine reads them; the repository owns them.
//! - `Stakeholder`, `SecurityClass`, `Issuance` - who holds which shares
//! - `OptionGrant`, `Vesting` - options and their schedules
//! - `Safe` - convertible investments
//! - `Snapshot` - all of the above for one calculation pass

mod holdings;
mod option_grant;
mod safe;
mod snapshot;

pub use holdings::{Issuance, SecurityClass, Stakeholder};
pub use option_grant::{OptionGrant, Vesting};
pub use safe::Safe;
pub use snapshot::Snapshot;
