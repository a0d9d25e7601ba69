// src/lib.rs
//! MrsWatson version stub: parse one flag, print one line.
//!
//! The binary in `main.rs` is a thin shim over [`app::run`]; everything
//! observable lives here so integration tests and unit tests share the same
//! code path.

pub mod app;
pub mod cli;
pub mod version;
