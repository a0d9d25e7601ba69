// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::Args;
use crate::version::VersionInfo;

/// Execute one invocation against parsed arguments.
///
/// The only effect is a single greeting line on `out` when the version flag
/// is set; with the flag absent nothing is written.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    if args.version {
        writeln!(out, "{}", VersionInfo::current().greeting())
            .context("failed to write version line")?;
    }
    Ok(())
}
