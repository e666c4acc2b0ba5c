//! CLI Argument Parsing
//!
//! Global flags (--config, --verbose) are inherited by all subcommands.
//! Every subcommand reads one JSON snapshot and prints JSON on stdout.

use std::path::PathBuf;

use captable::UtcDate;
use clap::{Parser, Subcommand};

/// Captable - cap table calculation engine
#[derive(Parser, Debug)]
#[command(name = "captable")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./captable.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ownership table with outstanding and fully-diluted totals
    Calc {
        /// Path to the JSON snapshot
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Valuation date, YYYY-MM-DD (defaults to config, then today)
        #[arg(long)]
        as_of: Option<UtcDate>,
    },

    /// Vesting progress of every option grant
    Vesting {
        /// Path to the JSON snapshot
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Valuation date, YYYY-MM-DD (defaults to config, then today)
        #[arg(long)]
        as_of: Option<UtcDate>,
    },

    /// Preview SAFE conversions at a priced round
    Convert {
        /// Path to the JSON snapshot
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Round price per share
        #[arg(long)]
        price: f64,

        /// Pre-money fully-diluted share count
        #[arg(long)]
        pre_money_shares: u64,

        /// Treat SAFEs without an explicit flag as post-money
        #[arg(long)]
        post_money: bool,
    },

    /// Check a snapshot for errors and warnings (exits non-zero on errors)
    Validate {
        /// Path to the JSON snapshot
        #[arg(short, long)]
        snapshot: PathBuf,
    },
}
