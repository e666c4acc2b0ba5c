use std::path::Path;

use anyhow::{Context, Result};
use captable::config::Config;
use captable::presentation::create_calc_use_case;
use captable::UtcDate;

pub fn cmd_calc(snapshot: &Path, as_of: Option<UtcDate>, config: &Config) -> Result<()> {
    let as_of = as_of.unwrap_or_else(|| config.as_of_or_today());
    let table = create_calc_use_case(snapshot, config)
        .execute(&as_of)
        .with_context(|| format!("cap table for {}", snapshot.display()))?;
    super::emit(&table)
}
