//! pkgrun — argument interpretation for a package-execution launcher.
//!
//! Given the launcher's argument vector, [`args::parse`] works out which
//! command to run, which package provides it, and which arguments belong to
//! the command. Installing and spawning are left to the caller.

pub mod args;
pub mod config;
pub mod help;
pub mod logging;
