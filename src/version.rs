// src/version.rs
//! Build-time version identity.
//!
//! The triple is fixed at compile time and must agree with the version in
//! `Cargo.toml`; a unit test guards the two against drifting apart.

use std::fmt;

/// Name printed in the greeting line, independent of the binary name.
pub const PROGRAM_NAME: &str = "MrsWatson";

pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 0;
pub const VERSION_PATCH: u32 = 1;

/// Immutable (major, minor, patch) release triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionInfo {
    /// The version this binary was built as.
    pub const fn current() -> Self {
        Self {
            major: VERSION_MAJOR,
            minor: VERSION_MINOR,
            patch: VERSION_PATCH,
        }
    }

    /// Full greeting line, e.g. `This is MrsWatson, version 0.0.1`.
    pub fn greeting(&self) -> String {
        format!("This is {PROGRAM_NAME}, version {self}")
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
