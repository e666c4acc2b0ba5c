//! Subcommand handlers
//!
//! Each handler builds its use case, runs it and writes the result to
//! stdout as pretty JSON. Logs go to stderr.

mod calc;
mod convert;
mod validate;
mod vesting;

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

pub use calc::cmd_calc;
pub use convert::cmd_convert;
pub use validate::cmd_validate;
pub use vesting::cmd_vesting;

/// Write `value` to stdout as pretty JSON followed by a newline
fn emit<T: Serialize>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    write_json(&mut out, value)?;
    out.flush()?;
    Ok(())
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    out.write_all(b"\n")?;
    Ok(())
}
