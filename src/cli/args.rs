// src/cli/args.rs
use clap::Parser;

/// Top-level CLI arguments parsed via clap.
///
/// clap's built-in version flag is disabled: the greeting line printed for
/// `-v`/`--version` is owned by [`crate::app::run`], not by clap.
#[derive(Parser, Debug)]
#[command(
    name = "mrswatson",
    about = "Command-line audio plugin host",
    disable_version_flag = true
)]
pub struct Args {
    /// Print the version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,
}
