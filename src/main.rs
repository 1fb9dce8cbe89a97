//! armgraph CLI entry point
//!
//! Parses arguments, runs the command, and turns failures into colored,
//! user-friendly errors with a non-zero exit status.

use anyhow::Result;
use armgraph::cli;
use armgraph::core::user_friendly_error;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}
