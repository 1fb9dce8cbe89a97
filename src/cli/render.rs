//! `render` command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::InputArgs;
use crate::config::Config;
use crate::pipeline::Pipeline;
use crate::render::DotRenderer;
use crate::report::print_reports;
use crate::resolver::{GraphBuilder, ReferenceResolver, TypeFilter};

/// Build, validate and render the graph of every manifest in the input.
#[derive(Args, Debug)]
pub struct RenderCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Leave out nodes whose identity contains this text (repeatable)
    #[arg(long = "exclude-type", value_name = "TEXT")]
    pub exclude_types: Vec<String>,

    /// Directory to write graphs to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl RenderCommand {
    pub async fn execute(self, config: &Config) -> Result<()> {
        let exclude_types = if self.exclude_types.is_empty() {
            config.filter.exclude_types.clone()
        } else {
            self.exclude_types.clone()
        };
        let output_dir = self.output_dir.clone().unwrap_or_else(|| config.render.output_dir.clone());

        let pipeline = Pipeline::new(GraphBuilder::new(ReferenceResolver::new(&config.resolver)))
            .with_filter(TypeFilter::new(exclude_types))
            .with_renderer(DotRenderer::new(output_dir))
            .with_error_color(config.render.error_color.clone());

        let reports = self.input.process(&pipeline).await?;
        print_reports(&reports, self.input.format)
    }
}
