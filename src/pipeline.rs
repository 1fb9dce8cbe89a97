//! Per-manifest processing: build, validate, filter, render.

use anyhow::Result;
use tracing::info;

use crate::manifest::LabeledManifest;
use crate::render::{NodeStyles, Renderer, output_name};
use crate::report::ManifestReport;
use crate::resolver::{GraphBuilder, TypeFilter};
use crate::validation::{GraphValidator, ValidatorSet};

/// Everything needed to process manifests. Holds no per-manifest state.
pub struct Pipeline {
    builder: GraphBuilder,
    validator: Box<dyn GraphValidator>,
    filter: TypeFilter,
    renderer: Option<Box<dyn Renderer>>,
    error_color: String,
}

impl Pipeline {
    pub fn new(builder: GraphBuilder) -> Self {
        Self {
            builder,
            validator: Box::new(ValidatorSet::standard()),
            filter: TypeFilter::default(),
            renderer: None,
            error_color: crate::render::DEFAULT_ERROR_COLOR.to_string(),
        }
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl GraphValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: TypeFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    #[must_use]
    pub fn with_error_color(mut self, color: impl Into<String>) -> Self {
        self.error_color = color.into();
        self
    }

    /// Process one manifest.
    ///
    /// Validation sees the full graph; the type filter only applies to what is
    /// rendered. Only rendering can fail.
    pub fn run(&self, input: &LabeledManifest) -> Result<ManifestReport> {
        let output = self.builder.build(&input.manifest.resources);
        let mut graph = output.graph;

        let flagged = self.validator.validate(&graph, &output.resource_types);
        let valid = flagged.is_empty();
        info!("{}: {} node(s), {} edge(s), valid: {}", input.label, graph.node_count(), graph.edge_count(), valid);

        let nodes = graph.node_count();
        let edges = graph.edge_count();
        let excluded = self.filter.apply(&mut graph);

        let output_path = match &self.renderer {
            Some(renderer) => {
                let styles =
                    NodeStyles::build(&graph, &output.resource_types, &flagged, &self.error_color);
                Some(renderer.render(&graph, &styles, &output_name(&input.label))?)
            }
            None => None,
        };

        Ok(ManifestReport {
            label: input.label.clone(),
            valid,
            has_primary_resource: output.has_primary_resource,
            nodes,
            edges,
            excluded,
            flagged,
            output: output_path,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(GraphBuilder::default())
    }
}
