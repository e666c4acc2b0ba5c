//! Cap table aggregator
//!
//! Walks every issuance and option grant in a snapshot as of a date and
//! produces per-stakeholder and total ownership figures.
//!
//! - Issued shares count toward both the outstanding and fully-diluted
//!   buckets. Issuances into an option pool class are skipped.
//! - Option grants count their vested part as outstanding and the whole
//!   grant as fully diluted.
//! - Unallocated option pool capacity counts toward fully diluted only.

use std::collections::BTreeMap;

use serde::Serialize;

use super::vesting::vested_qty;
use crate::domain::entities::Snapshot;
use crate::domain::value_objects::{StakeholderId, UtcDate};

/// Ownership of one stakeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapTableRow {
    pub stakeholder_id: StakeholderId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub outstanding: u64,
    pub fully_diluted: u64,
    pub pct_outstanding: f64,
    pub pct_fully_diluted: f64,
}

/// Outstanding share totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingTotals {
    pub issued: u64,
    pub vested: u64,
    pub total_outstanding: u64,
}

/// Fully diluted share totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullyDilutedTotals {
    pub issued: u64,
    pub granted: u64,
    pub pool_remaining: u64,
    #[serde(rename = "totalFD")]
    pub total_fd: u64,
}

/// Option pool usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolTotals {
    pub authorized: u64,
    pub granted: u64,
    pub remaining: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapTableTotals {
    pub issued_total: u64,
    pub vested_total: u64,
    pub unvested_total: u64,
    pub grants_total: u64,
    pub outstanding: OutstandingTotals,
    pub fd: FullyDilutedTotals,
    pub pool: PoolTotals,
}

/// Cap table as of one date
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapTable {
    pub as_of: UtcDate,
    pub rows: Vec<CapTableRow>,
    pub totals: CapTableTotals,
}

impl CapTable {
    /// Row for a stakeholder, if they hold anything
    pub fn row(&self, stakeholder_id: &StakeholderId) -> Option<&CapTableRow> {
        self.rows.iter().find(|r| &r.stakeholder_id == stakeholder_id)
    }
}

#[derive(Debug, Default)]
struct Bucket {
    outstanding: u64,
    fully_diluted: u64,
}

/// Compute the cap table for `snapshot` as of `as_of`.
///
/// Rows are ordered by fully-diluted quantity, largest first; ties are
/// broken by stakeholder id so the output is reproducible.
pub fn calc_cap(snapshot: &Snapshot, as_of: &UtcDate) -> CapTable {
    let mut buckets: BTreeMap<StakeholderId, Bucket> = BTreeMap::new();
    let mut totals = CapTableTotals::default();

    for issuance in &snapshot.issuances {
        let in_pool = snapshot
            .security_class(&issuance.security_class_id)
            .is_some_and(|class| class.kind.is_option_pool());
        if in_pool {
            continue;
        }

        let bucket = buckets.entry(issuance.stakeholder_id.clone()).or_default();
        bucket.outstanding = bucket.outstanding.saturating_add(issuance.quantity);
        bucket.fully_diluted = bucket.fully_diluted.saturating_add(issuance.quantity);
        totals.issued_total = totals.issued_total.saturating_add(issuance.quantity);
    }

    for grant in &snapshot.option_grants {
        let vested = vested_qty(as_of, grant.quantity, grant.vesting.as_ref());

        let bucket = buckets.entry(grant.stakeholder_id.clone()).or_default();
        bucket.outstanding = bucket.outstanding.saturating_add(vested);
        bucket.fully_diluted = bucket.fully_diluted.saturating_add(grant.quantity);

        totals.vested_total = totals.vested_total.saturating_add(vested);
        totals.unvested_total = totals.unvested_total.saturating_add(grant.quantity - vested);
        totals.grants_total = totals.grants_total.saturating_add(grant.quantity);
    }

    let pool_authorized = snapshot.pool_authorized();
    let pool_remaining = pool_authorized.saturating_sub(totals.grants_total);
    totals.pool = PoolTotals {
        authorized: pool_authorized,
        granted: totals.grants_total,
        remaining: pool_remaining,
    };

    let total_outstanding = totals.issued_total.saturating_add(totals.vested_total);
    totals.outstanding = OutstandingTotals {
        issued: totals.issued_total,
        vested: totals.vested_total,
        total_outstanding,
    };

    let total_fd = totals
        .issued_total
        .saturating_add(totals.grants_total)
        .saturating_add(pool_remaining);
    totals.fd = FullyDilutedTotals {
        issued: totals.issued_total,
        granted: totals.grants_total,
        pool_remaining,
        total_fd,
    };

    let mut rows: Vec<CapTableRow> = buckets
        .into_iter()
        .map(|(stakeholder_id, bucket)| CapTableRow {
            name: snapshot.stakeholder(&stakeholder_id).map(|s| s.name.clone()),
            stakeholder_id,
            outstanding: bucket.outstanding,
            fully_diluted: bucket.fully_diluted,
            pct_outstanding: fraction(bucket.outstanding, total_outstanding),
            pct_fully_diluted: fraction(bucket.fully_diluted, total_fd),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.fully_diluted
            .cmp(&a.fully_diluted)
            .then_with(|| a.stakeholder_id.cmp(&b.stakeholder_id))
    });

    CapTable {
        as_of: *as_of,
        rows,
        totals,
    }
}

fn fraction(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
