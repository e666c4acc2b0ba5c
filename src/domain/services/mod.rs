//! Domain Services
//!
//! The calculation engine. Every function here is pure: no I/O, no shared
//! state, same inputs always give the same outputs.
//!
//! - `vesting` - vested quantity under a cliff + linear schedule
//! - `safe_pricer` - SAFE conversion price and share count
//! - `aggregator` - per-stakeholder and total ownership

pub mod aggregator;
pub mod safe_pricer;
pub mod vesting;

pub use aggregator::{
    calc_cap, CapTable, CapTableRow, CapTableTotals, FullyDilutedTotals,
    OutstandingTotals, PoolTotals,
};
pub use safe_pricer::{
    convert_all_safes, convert_safe, post_money_cap_price_closed_form,
    solve_post_money_cap_price, ConversionReason, SafeConversion, SafeConversionRow,
};
pub use vesting::{vested_qty, vesting_status, VestingStatus};
