//! Graphviz DOT output.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use super::Renderer;
use super::styles::NodeStyles;
use crate::core::ArmGraphError;
use crate::resolver::DependencyGraph;

/// Writes `<output_dir>/<name>.dot`.
#[derive(Debug, Clone)]
pub struct DotRenderer {
    output_dir: PathBuf,
}

impl DotRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Renderer for DotRenderer {
    fn render(&self, graph: &DependencyGraph, styles: &NodeStyles, output_name: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(format!("{output_name}.dot"));

        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory {}", self.output_dir.display())
        })?;
        std::fs::write(&path, to_dot(graph, styles)).map_err(|e| ArmGraphError::RenderError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("Wrote {}", path.display());
        Ok(path)
    }
}

/// Render `graph` as a DOT `digraph`.
///
/// Declared nodes carry their style; dangling edge targets are emitted as plain
/// nodes so every edge stays visible.
pub fn to_dot(graph: &DependencyGraph, styles: &NodeStyles) -> String {
    let mut out = String::from("digraph dependencies {\n    node [style=filled];\n");

    for node in graph.nodes() {
        let mut attrs = vec![];
        if let Some(style) = styles.get(node.as_str()) {
            attrs.push(format!("fillcolor={}", quote(&style.color)));
            if let Some(label) = &style.label {
                attrs.push(format!("label={}", quote(&format!("{node}\n{label}"))));
            }
        }
        let _ = writeln!(out, "    {} [{}];", quote(node.as_str()), attrs.join(", "));
    }

    let dangling: BTreeSet<&str> =
        graph.dangling_references().into_iter().map(|(_, to)| to.as_str()).collect();
    for target in dangling {
        let _ = writeln!(out, "    {} [style=dashed];", quote(target));
    }

    for (from, to) in graph.edges() {
        let _ = writeln!(out, "    {} -> {};", quote(from.as_str()), quote(to.as_str()));
    }

    out.push_str("}\n");
    out
}

fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n");
    format!("\"{escaped}\"")
}
