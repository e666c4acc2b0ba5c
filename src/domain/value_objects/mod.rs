//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod record_id;
mod security_kind;
pub mod utc_date;

pub use record_id::{
    IssuanceId, OptionGrantId, RecordKind, RecordRef, SafeId, SecurityClassId, StakeholderId,
};
pub use security_kind::SecurityKind;
pub use utc_date::{format_utc_date, is_valid_iso_date, months_between, parse_utc_date, UtcDate};
