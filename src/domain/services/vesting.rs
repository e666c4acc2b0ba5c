//! Vesting calculator
//!
//! Pure domain logic: converts elapsed whole months into a vested share
//! count under a cliff plus linear-monthly schedule.

use serde::Serialize;

use crate::domain::entities::{OptionGrant, Vesting};
use crate::domain::value_objects::{months_between, OptionGrantId, StakeholderId, UtcDate};

/// Shares vested as of `as_of` out of `quantity`.
///
/// A grant without a schedule vests nothing; it is treated as unvested
/// until a schedule is attached.
///
/// The result is `floor(min(elapsed, months_total) / months_total * quantity)`
/// once the cliff is reached, computed exactly in integers, so it never
/// exceeds `quantity` and reaches it exactly at `months_total`.
pub fn vested_qty(as_of: &UtcDate, quantity: u64, vesting: Option<&Vesting>) -> u64 {
    let Some(vesting) = vesting else {
        return 0;
    };

    let elapsed = months_between(as_of, &vesting.start);
    if elapsed < vesting.cliff_months {
        return 0;
    }
    if vesting.months_total == 0 {
        return quantity;
    }

    let progressed = elapsed.min(vesting.months_total);
    let vested = u128::from(progressed) * u128::from(quantity) / u128::from(vesting.months_total);
    // progressed <= months_total, so vested <= quantity
    u64::try_from(vested).unwrap_or(quantity)
}

/// Vesting progress of a single grant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VestingStatus {
    pub grant_id: OptionGrantId,
    pub stakeholder_id: StakeholderId,
    pub quantity: u64,
    pub vested: u64,
    pub unvested: u64,
    pub elapsed_months: u32,
    pub cliff_reached: bool,
    pub fully_vested: bool,
}

/// Vesting progress of `grant` as of `as_of`
pub fn vesting_status(as_of: &UtcDate, grant: &OptionGrant) -> VestingStatus {
    let vesting = grant.vesting.as_ref();
    let vested = vested_qty(as_of, grant.quantity, vesting);
    let elapsed_months = vesting.map_or(0, |v| months_between(as_of, &v.start));
    let cliff_reached = vesting.is_some_and(|v| elapsed_months >= v.cliff_months);

    VestingStatus {
        grant_id: grant.id.clone(),
        stakeholder_id: grant.stakeholder_id.clone(),
        quantity: grant.quantity,
        vested,
        unvested: grant.quantity - vested,
        elapsed_months,
        cliff_reached,
        fully_vested: vested == grant.quantity,
    }
}
