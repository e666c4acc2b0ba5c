use std::path::Path;

use anyhow::{Context, Result};
use captable::config::Config;
use captable::presentation::create_vesting_use_case;
use captable::UtcDate;

pub fn cmd_vesting(snapshot: &Path, as_of: Option<UtcDate>, config: &Config) -> Result<()> {
    let as_of = as_of.unwrap_or_else(|| config.as_of_or_today());
    let report = create_vesting_use_case(snapshot, config)
        .execute(&as_of)
        .with_context(|| format!("vesting report for {}", snapshot.display()))?;
    super::emit(&report)
}
