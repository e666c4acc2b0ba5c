//! Convert Use Case
//!
//! Preview how every SAFE in a snapshot converts at a priced round.

use serde::Serialize;

use crate::domain::ports::SnapshotSource;
use crate::domain::services::{convert_all_safes, ConversionReason, SafeConversionRow};
use crate::error::CapTableResult;

use super::options::EngineOptions;
use super::validate::load_validated;

/// Round terms plus the resulting SAFE conversions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionPreview {
    pub price_per_share: f64,
    pub pre_money_shares: u64,
    pub conversions: Vec<SafeConversionRow>,
    pub total_shares_issued: u64,
}

pub struct ConvertUseCase<S: SnapshotSource> {
    source: S,
    options: EngineOptions,
}

impl<S: SnapshotSource> ConvertUseCase<S> {
    pub fn new(source: S, options: EngineOptions) -> Self {
        Self { source, options }
    }

    pub fn execute(
        &self,
        price_per_share: f64,
        pre_money_shares: u64,
    ) -> CapTableResult<ConversionPreview> {
        let snapshot = load_validated(&self.source, &self.options)?;
        let conversions = convert_all_safes(
            &snapshot,
            price_per_share,
            pre_money_shares,
            self.options.default_post_money,
        );

        for row in &conversions {
            tracing::debug!(
                safe = %row.safe_id,
                shares = row.conversion.shares_issued,
                reason = %row.conversion.conversion_reason,
                "SAFE converted"
            );
        }
        let total_shares_issued = conversions
            .iter()
            .map(|row| row.conversion.shares_issued)
            .fold(0u64, u64::saturating_add);

        Ok(ConversionPreview {
            price_per_share,
            pre_money_shares,
            conversions,
            total_shares_issued,
        })
    }
}

impl ConversionPreview {
    /// Number of SAFEs whose price came from `reason`
    pub fn count_by_reason(&self, reason: ConversionReason) -> usize {
        self.conversions
            .iter()
            .filter(|row| row.conversion.conversion_reason == reason)
            .count()
    }
}
