//! CLI runner - executes commands

use crate::cli::commands::{BuildArgs, Cli, Commands, OutputFormat};
use crate::config::{load_options, PaginationOptions};
use crate::error::{Result, ResultExt};
use crate::pagination::{PageWindow, Pagination};
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// JSON shape printed by the `build` command
#[derive(Debug, Serialize)]
struct BuildOutput<'a> {
    #[serde(flatten)]
    window: &'a PageWindow,
    previous_set_page: Option<u64>,
    next_set_page: Option<u64>,
}

impl<'a> From<&'a PageWindow> for BuildOutput<'a> {
    fn from(window: &'a PageWindow) -> Self {
        Self {
            window,
            previous_set_page: window.previous_set_page(),
            next_set_page: window.next_set_page(),
        }
    }
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing results to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Run the CLI command, writing results to `out`
    pub fn run_with(&self, out: &mut impl Write) -> Result<()> {
        match &self.cli.command {
            Commands::Build(args) => self.build(args, out),
            Commands::Defaults => self.defaults(out),
        }
    }

    /// Resolve options from the file (if any) and flag overrides
    fn resolve_options(&self, args: &BuildArgs) -> Result<PaginationOptions> {
        let base = match &args.options {
            Some(path) => load_options(path)?,
            None => PaginationOptions::default(),
        };
        Ok(base.merge(args.overrides()))
    }

    fn build(&self, args: &BuildArgs, out: &mut impl Write) -> Result<()> {
        let options = self.resolve_options(args)?;
        let window = options.builder().build();
        info!("{window}");

        self.write_window(&window, out)
            .with_context(|| format!("Failed to write {window}"))
    }

    fn write_window(&self, window: &PageWindow, out: &mut impl Write) -> Result<()> {
        let output = BuildOutput::from(window);
        match self.cli.format {
            OutputFormat::Json => serde_json::to_writer(&mut *out, &output)?,
            OutputFormat::Pretty => serde_json::to_writer_pretty(&mut *out, &output)?,
        }
        writeln!(out)?;
        Ok(())
    }

    fn defaults(&self, out: &mut impl Write) -> Result<()> {
        let yaml = serde_yaml::to_string(&PaginationOptions::default())?;
        out.write_all(yaml.as_bytes())
            .context("Failed to write default options")
    }
}
