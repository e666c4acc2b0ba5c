//! SAFE conversion pricer
//!
//! Picks the best of the round price, the discount price and the
//! valuation-cap price for converting a SAFE into shares at a priced round.
//!
//! The check order is fixed: the cap is compared against the round price
//! first, then the discount against whatever is selected at that point. A
//! candidate only wins when it is strictly lower.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Safe, Snapshot};
use crate::domain::value_objects::{SafeId, StakeholderId};

/// Maximum fixed-point iterations for the post-money cap solver
pub const POST_MONEY_MAX_ITERATIONS: usize = 10;

/// Stop iterating once the share count moves by less than this
pub const POST_MONEY_TOLERANCE: f64 = 0.01;

/// Which candidate price governed a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionReason {
    /// The round price
    Price,
    /// The valuation cap price
    Cap,
    /// The discounted round price
    Discount,
}

impl fmt::Display for ConversionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionReason::Price => write!(f, "price"),
            ConversionReason::Cap => write!(f, "cap"),
            ConversionReason::Discount => write!(f, "discount"),
        }
    }
}

/// Outcome of converting one SAFE
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeConversion {
    pub shares_issued: u64,
    pub conversion_price: f64,
    pub conversion_reason: ConversionReason,
}

impl SafeConversion {
    fn nothing(price: f64) -> Self {
        Self {
            shares_issued: 0,
            conversion_price: price,
            conversion_reason: ConversionReason::Price,
        }
    }
}

/// Convert `safe` at a round priced at `price_per_share` with
/// `pre_money_shares` outstanding before the round.
///
/// Degenerate inputs never fail:
/// - a non-positive amount converts into nothing at the round price;
/// - a non-positive round price with no usable cap converts into nothing at 0;
/// - a non-positive round price with a usable cap converts at the cap price.
pub fn convert_safe(
    safe: &Safe,
    price_per_share: f64,
    pre_money_shares: u64,
    is_post_money: bool,
) -> SafeConversion {
    let amount = safe.amount;
    if amount.is_nan() || amount <= 0.0 {
        return SafeConversion::nothing(price_per_share);
    }

    let cap_price = safe
        .cap
        .and_then(|cap| cap_price(amount, cap, pre_money_shares, is_post_money));

    let round_is_valid = is_usable_price(price_per_share);
    if !round_is_valid && cap_price.is_none() {
        return SafeConversion::nothing(0.0);
    }

    let mut price = price_per_share;
    let mut reason = ConversionReason::Price;

    if let Some(cap_price) = cap_price {
        if !round_is_valid || cap_price < price {
            price = cap_price;
            reason = ConversionReason::Cap;
        }
    }

    if let Some(discount_price) = safe
        .discount
        .and_then(|discount| discount_price(price_per_share, discount))
    {
        if discount_price < price {
            price = discount_price;
            reason = ConversionReason::Discount;
        }
    }

    let price = clamp_price(price);
    SafeConversion {
        shares_issued: floor_shares(amount / price),
        conversion_price: price,
        conversion_reason: reason,
    }
}

/// Cap price, or `None` when the cap does not apply (zero shares, zero cap).
fn cap_price(amount: f64, cap: f64, pre_money_shares: u64, is_post_money: bool) -> Option<f64> {
    if pre_money_shares == 0 || !is_usable_price(cap) {
        return None;
    }
    let price = if is_post_money {
        solve_post_money_cap_price(amount, cap, pre_money_shares as f64)
    } else {
        cap / pre_money_shares as f64
    };
    is_usable_price(price).then_some(price)
}

/// Discount price, valid only when it is positive.
fn discount_price(price_per_share: f64, discount: f64) -> Option<f64> {
    let price = price_per_share * discount;
    is_usable_price(price).then_some(price)
}

/// Post-money cap price by bounded fixed-point iteration.
///
/// The SAFE's own shares dilute the cap: `price = cap / (pre + shares)` and
/// `shares = amount / price`. Seeded from the pre-money price and stopped
/// after [`POST_MONEY_MAX_ITERATIONS`] or once the share count moves less
/// than [`POST_MONEY_TOLERANCE`].
pub fn solve_post_money_cap_price(amount: f64, cap: f64, pre_money_shares: f64) -> f64 {
    let mut price = cap / pre_money_shares;
    let mut shares = amount / price;

    for _ in 0..POST_MONEY_MAX_ITERATIONS {
        let next_price = cap / (pre_money_shares + shares);
        let next_shares = amount / next_price;
        let delta = (next_shares - shares).abs();
        price = next_price;
        shares = next_shares;
        if delta < POST_MONEY_TOLERANCE {
            break;
        }
    }

    price
}

/// Closed-form post-money cap price.
///
/// `shares = amount * pre / (cap - amount)`, only defined when the cap
/// exceeds the amount. Not used by [`convert_safe`]; kept for comparing
/// against the iterative solver.
pub fn post_money_cap_price_closed_form(
    amount: f64,
    cap: f64,
    pre_money_shares: f64,
) -> Option<f64> {
    if cap <= amount || pre_money_shares <= 0.0 {
        return None;
    }
    let shares = amount * pre_money_shares / (cap - amount);
    Some(cap / (pre_money_shares + shares))
}

/// One SAFE's conversion in a round preview
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeConversionRow {
    pub safe_id: SafeId,
    pub stakeholder_id: StakeholderId,
    pub amount: f64,
    pub post_money: bool,
    #[serde(flatten)]
    pub conversion: SafeConversion,
}

/// Convert every SAFE in `snapshot` at the same round.
///
/// Each SAFE uses its own pre/post-money flag, falling back to
/// `default_post_money`. Rows keep snapshot order.
pub fn convert_all_safes(
    snapshot: &Snapshot,
    price_per_share: f64,
    pre_money_shares: u64,
    default_post_money: bool,
) -> Vec<SafeConversionRow> {
    snapshot
        .safes
        .iter()
        .map(|safe| {
            let post_money = safe.post_money.unwrap_or(default_post_money);
            SafeConversionRow {
                safe_id: safe.id.clone(),
                stakeholder_id: safe.stakeholder_id.clone(),
                amount: safe.amount,
                post_money,
                conversion: convert_safe(safe, price_per_share, pre_money_shares, post_money),
            }
        })
        .collect()
}

fn is_usable_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

fn clamp_price(price: f64) -> f64 {
    if price == 0.0 {
        f64::EPSILON
    } else {
        price.abs()
    }
}

fn floor_shares(shares: f64) -> u64 {
    if shares.is_finite() && shares > 0.0 {
        // `as` saturates at u64::MAX
        shares.floor() as u64
    } else {
        0
    }
}
