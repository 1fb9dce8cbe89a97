//! `check` command.

use anyhow::{Result, bail};
use clap::Args;

use super::InputArgs;
use crate::config::Config;
use crate::pipeline::Pipeline;
use crate::report::print_reports;
use crate::resolver::{GraphBuilder, ReferenceResolver};

/// Build and validate every manifest in the input, without rendering.
#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Exit with an error when any manifest is invalid or has no primary resource
    #[arg(long)]
    pub strict: bool,
}

impl CheckCommand {
    pub async fn execute(self, config: &Config) -> Result<()> {
        let pipeline = Pipeline::new(GraphBuilder::new(ReferenceResolver::new(&config.resolver)));

        let reports = self.input.process(&pipeline).await?;
        print_reports(&reports, self.input.format)?;

        let failing = reports.iter().filter(|r| !r.is_clean()).count();
        if self.strict && failing > 0 {
            bail!("{failing} of {} manifest(s) failed checks", reports.len());
        }
        Ok(())
    }
}
