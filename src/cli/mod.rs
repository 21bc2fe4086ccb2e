//! CLI module
//!
//! Command-line interface for computing page windows.
//!
//! # Commands
//!
//! - `build` - Compute a page window from an options file and/or flags
//! - `defaults` - Print the default options

mod commands;
mod runner;

pub use commands::{BuildArgs, Cli, Commands, OutputFormat};
pub use runner::Runner;
