//! Captable CLI - cap table calculation engine
//!
//! Usage: captable [--config FILE] [-v...] <COMMAND> --snapshot FILE
//!
//! Commands:
//!   calc      Ownership table as of a date
//!   vesting   Vesting progress of every option grant
//!   convert   SAFE conversion preview at a priced round
//!   validate  Errors and warnings in a snapshot

mod cli;
mod commands;

use anyhow::{Context, Result};
use captable::config::Config;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_root = std::env::current_dir().context("current directory")?;
    let (config, warnings) = Config::resolve(cli.config.as_deref(), &project_root)
        .context("loading configuration")?;

    init_tracing(cli.verbose, &config.log.filter);
    for warning in &warnings {
        match &warning.suggestion {
            Some(suggestion) => tracing::warn!(
                file = %warning.file.display(),
                line = warning.line,
                "unknown config key '{}', did you mean '{suggestion}'?",
                warning.key
            ),
            None => tracing::warn!(
                file = %warning.file.display(),
                line = warning.line,
                "unknown config key '{}'",
                warning.key
            ),
        }
    }

    match cli.command {
        Commands::Calc { snapshot, as_of } => commands::cmd_calc(&snapshot, as_of, &config),
        Commands::Vesting { snapshot, as_of } => commands::cmd_vesting(&snapshot, as_of, &config),
        Commands::Convert {
            snapshot,
            price,
            pre_money_shares,
            post_money,
        } => commands::cmd_convert(&snapshot, price, pre_money_shares, post_money, &config),
        Commands::Validate { snapshot } => commands::cmd_validate(&snapshot, &config),
    }
}

/// Logs go to stderr; stdout carries only JSON.
///
/// `-v` flags win over `RUST_LOG`, which wins over the configured filter.
fn init_tracing(verbose: u8, configured: &str) {
    let env_filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(configured))
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .init();
}
