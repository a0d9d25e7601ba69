// src/main.rs
use std::io;
use std::process::ExitCode;

use clap::Parser;

use mrswatson::app;
use mrswatson::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    match app::run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mrswatson: {err:#}");
            ExitCode::FAILURE
        }
    }
}
