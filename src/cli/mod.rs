//! Command-line interface for armgraph.
//!
//! # Commands
//!
//! - `render` - build, validate and write one graph per manifest
//! - `check` - build and validate only
//!
//! # Global Options
//!
//! - `--verbose` - debug logging on stderr
//! - `--quiet` - no logging
//! - `--config` - path to a configuration file
//!
//! # Example
//!
//! ```bash
//! armgraph render azuredeploy.json --exclude-type Principal --output-dir graphs
//! armgraph check results.csv --format json --strict
//! ```

mod check;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::pipeline::Pipeline;
use crate::report::{ManifestReport, ReportFormat};
use crate::source;

pub use check::CheckCommand;
pub use render::RenderCommand;

/// Logging settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Filter directive for the subscriber; `None` disables logging.
    ///
    /// When not forced by a flag, `RUST_LOG` is honored and `info` is the fallback.
    pub log_level: Option<String>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Safe to call more than once; later calls are ignored.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };

        let filter = if std::env::var("RUST_LOG").is_ok() && level == "info" {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(level)
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Input options shared by every command.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Deployment template (.json) or run log (.csv)
    #[arg(default_value = source::DEFAULT_INPUT)]
    pub file: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

impl InputArgs {
    /// Load every manifest from the input and run each through `pipeline`.
    pub async fn process(&self, pipeline: &Pipeline) -> Result<Vec<ManifestReport>> {
        let loaded = source::load(&self.file).await?;
        if loaded.skipped_rows > 0 {
            tracing::warn!("Skipped {} unusable row(s) in {}", loaded.skipped_rows, self.file.display());
        }

        loaded.manifests.iter().map(|manifest| pipeline.run(manifest)).collect()
    }
}

/// Build and check dependency graphs of deployment templates.
#[derive(Parser)]
#[command(
    name = "armgraph",
    about = "Build and check dependency graphs of deployment templates",
    version,
    long_about = "armgraph resolves the dependsOn expressions of deployment template resources into a dependency graph, checks it, and writes it as Graphviz DOT."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Disable logging; only reports and errors are printed
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file (default: ~/.armgraph/config.toml)
    #[arg(short, long, global = true, env = "ARMGRAPH_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build, validate and render the graph of each manifest
    Render(RenderCommand),

    /// Build and validate each manifest without writing output
    Check(CheckCommand),
}

impl Cli {
    /// Run the parsed command.
    pub async fn execute(self) -> Result<()> {
        let cli_config = self.build_config();
        cli_config.init_logging();

        let config = Config::load(self.config.as_deref()).await?;

        match self.command {
            Commands::Render(cmd) => cmd.execute(&config).await,
            Commands::Check(cmd) => cmd.execute(&config).await,
        }
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("info".to_string())
        };

        CliConfig {
            log_level,
        }
    }
}
