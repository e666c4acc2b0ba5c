use std::path::Path;

use anyhow::{bail, Context, Result};
use captable::config::Config;
use captable::presentation::create_convert_use_case;

pub fn cmd_convert(
    snapshot: &Path,
    price: f64,
    pre_money_shares: u64,
    post_money: bool,
    config: &Config,
) -> Result<()> {
    if !price.is_finite() {
        bail!("--price must be a finite number, got {price}");
    }

    let mut config = config.clone();
    config.safe.post_money |= post_money;

    let preview = create_convert_use_case(snapshot, &config)
        .execute(price, pre_money_shares)
        .with_context(|| format!("SAFE conversion for {}", snapshot.display()))?;
    super::emit(&preview)
}
