//! Handing finished graphs to a renderer.
//!
//! The graph core only supplies three things to rendering: the graph, a style per
//! node ([`NodeStyles`]) and a sanitized output name ([`output_name`]). Layout and
//! file emission belong to the [`Renderer`]. The bundled [`DotRenderer`] writes
//! Graphviz source; rasterizing it is left to Graphviz itself.

pub mod dot;
pub mod styles;

use anyhow::Result;
use std::path::PathBuf;

pub use dot::DotRenderer;
pub use styles::{DEFAULT_ERROR_COLOR, NodeStyle, NodeStyles};

use crate::resolver::DependencyGraph;

/// Capability to emit a rendered graph.
pub trait Renderer {
    /// Render `graph` under `output_name` and return the written path.
    fn render(&self, graph: &DependencyGraph, styles: &NodeStyles, output_name: &str) -> Result<PathBuf>;
}

/// File-system safe name for a manifest label.
///
/// Keeps letters, digits, spaces, `+` and `-`; trailing whitespace is trimmed.
pub fn output_name(label: &str) -> String {
    let kept: String =
        label.chars().filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '+' | '-')).collect();
    kept.trim_end().to_string()
}
