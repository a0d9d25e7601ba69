// src/cli/mod.rs
//! Command-line surface: one boolean flag plus clap's generated help and
//! parse-error paths.

mod args;

pub use args::Args;
