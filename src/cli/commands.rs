//! CLI commands and argument parsing

use crate::config::OptionOverrides;
use crate::types::LogLevel;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Page window calculator
#[derive(Parser, Debug)]
#[command(name = "page-window")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Log level (logs go to stderr; RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the page window for the given inputs
    Build(BuildArgs),

    /// Print the default options as YAML
    Defaults,
}

/// Inputs for the `build` command; flags override values from `--options`
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Options file (YAML, or JSON with a .json extension)
    #[arg(short, long)]
    pub options: Option<PathBuf>,

    /// Requested page
    #[arg(short, long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Total number of items
    #[arg(short, long, allow_negative_numbers = true)]
    pub total_items: Option<i64>,

    /// Items per page
    #[arg(short = 's', long, allow_negative_numbers = true)]
    pub page_size: Option<i64>,

    /// Page numbers per window
    #[arg(short, long, allow_negative_numbers = true)]
    pub window: Option<i64>,
}

impl BuildArgs {
    /// Flag values as option overrides
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            current_page: self.page,
            total_items_count: self.total_items,
            items_list_size: self.page_size,
            pages_count_in_set: self.window,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
