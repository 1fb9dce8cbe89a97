//! Post-build pruning of node types that clutter rendered graphs.

use std::collections::BTreeSet;

use tracing::debug;

use super::dependency_graph::DependencyGraph;
use crate::core::NodeIdentity;

/// Removes nodes whose identity contains any excluded substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeFilter {
    excluded: BTreeSet<String>,
}

impl TypeFilter {
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded
                .into_iter()
                .map(Into::<String>::into)
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    pub fn excludes(&self, node: &NodeIdentity) -> bool {
        self.excluded.iter().any(|pattern| node.contains(pattern))
    }

    /// Remove excluded nodes and every edge touching them. Returns removed nodes.
    pub fn apply(&self, graph: &mut DependencyGraph) -> Vec<NodeIdentity> {
        if self.is_empty() {
            return Vec::new();
        }

        let removed = graph.remove_matching(|node| self.excludes(node));
        debug!("Type filter removed {} node(s)", removed.len());
        removed
    }
}
