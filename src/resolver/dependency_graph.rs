//! Directed dependency graph of one manifest.
//!
//! Nodes are the identities of declared resources. Edges run from a dependent to
//! the target of one of its dependency expressions, in declaration order. Duplicate
//! edges and self-edges are kept as declared.
//!
//! Edge targets that came out of the text heuristic may name an identity that was
//! never declared. Such *dangling references* are a valid state: they are kept in
//! the edge lists but are not members of the node set, and it is up to validation
//! to flag them.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::core::NodeIdentity;

/// Dependency graph for one manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Identities of declared resources.
    nodes: BTreeSet<NodeIdentity>,
    /// Dependent -> dependency targets, in declaration order.
    edges: BTreeMap<NodeIdentity, Vec<NodeIdentity>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declared node. Returns `false` if the identity was already present.
    pub fn add_node(&mut self, node: NodeIdentity) -> bool {
        self.nodes.insert(node)
    }

    /// Append an edge `from -> to`. Neither endpoint is added to the node set.
    pub fn add_edge(&mut self, from: NodeIdentity, to: NodeIdentity) {
        self.edges.entry(from).or_default().push(to);
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    /// Declared nodes in identity order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeIdentity> {
        self.nodes.iter()
    }

    /// Direct dependency targets of `node`.
    pub fn dependencies_of(&self, node: &str) -> &[NodeIdentity] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every edge as `(dependent, dependency)`.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeIdentity, &NodeIdentity)> {
        self.edges.iter().flat_map(|(from, targets)| targets.iter().map(move |to| (from, to)))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Edges whose target is not a declared node.
    pub fn dangling_references(&self) -> Vec<(&NodeIdentity, &NodeIdentity)> {
        self.edges().filter(|(_, to)| !self.nodes.contains(*to)).collect()
    }

    /// Remove every node and edge endpoint for which `exclude` returns true.
    ///
    /// Returns the removed declared nodes. Edge endpoints that were never declared
    /// are matched too, so no surviving edge names an excluded identity.
    pub fn remove_matching(&mut self, exclude: impl Fn(&NodeIdentity) -> bool) -> Vec<NodeIdentity> {
        let removed: Vec<NodeIdentity> = self.nodes.iter().filter(|n| exclude(n)).cloned().collect();
        self.nodes.retain(|n| !exclude(n));

        self.edges.retain(|from, targets| {
            if exclude(from) {
                return false;
            }
            targets.retain(|to| !exclude(to));
            !targets.is_empty()
        });

        removed
    }

    /// Build a petgraph view of the graph.
    ///
    /// Dangling targets become nodes of the view so that every edge is kept. Nodes
    /// are added in identity order, then edge targets in edge order.
    pub fn to_digraph(&self) -> (DiGraph<NodeIdentity, ()>, HashMap<NodeIdentity, NodeIndex>) {
        let mut graph = DiGraph::new();
        let mut index: HashMap<NodeIdentity, NodeIndex> = HashMap::new();

        let mut ensure = |graph: &mut DiGraph<NodeIdentity, ()>, node: &NodeIdentity| {
            *index.entry(node.clone()).or_insert_with(|| graph.add_node(node.clone()))
        };

        for node in &self.nodes {
            ensure(&mut graph, node);
        }
        for (from, to) in self.edges() {
            let from_idx = ensure(&mut graph, from);
            let to_idx = ensure(&mut graph, to);
            graph.add_edge(from_idx, to_idx, ());
        }

        (graph, index)
    }

    /// Strongly connected components that form cycles, self-loops included.
    ///
    /// Each cycle is sorted, and the list of cycles is sorted, so the result does not
    /// depend on traversal order.
    pub fn cycles(&self) -> Vec<Vec<NodeIdentity>> {
        let (graph, _) = self.to_digraph();

        let mut cycles: Vec<Vec<NodeIdentity>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component.first().is_some_and(|idx| graph.find_edge(*idx, *idx).is_some())
            })
            .map(|component| {
                let mut members: Vec<NodeIdentity> =
                    component.into_iter().map(|idx| graph[idx].clone()).collect();
                members.sort_unstable();
                members
            })
            .collect();

        cycles.sort_unstable();
        cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeIdentity {
        NodeIdentity::from(s)
    }

    #[test]
    fn test_empty_graph() {
        let graph = DependencyGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.cycles().is_empty());
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let mut graph = DependencyGraph::new();
        graph.add_node(id("A/a"));
        graph.add_node(id("B/b"));
        graph.add_edge(id("A/a"), id("B/b"));
        graph.add_edge(id("A/a"), id("B/b"));

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.dependencies_of("A/a"), &[id("B/b"), id("B/b")]);
        assert_eq!(graph.to_digraph().0.edge_count(), 2);
    }

    #[test]
    fn test_add_node_coalesces_same_identity() {
        let mut graph = DependencyGraph::new();
        assert!(graph.add_node(id("A/a")));
        assert!(!graph.add_node(id("A/a")));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_dangling_references() {
        let mut graph = DependencyGraph::new();
        graph.add_node(id("A/a"));
        graph.add_edge(id("A/a"), id("missing"));

        assert!(!graph.contains_node("missing"));
        assert_eq!(graph.dangling_references(), vec![(&id("A/a"), &id("missing"))]);

        let (view, index) = graph.to_digraph();
        assert_eq!(view.node_count(), 2);
        assert!(index.contains_key("missing"));
    }

    #[test]
    fn test_remove_matching_drops_incoming_and_outgoing() {
        let mut graph = DependencyGraph::new();
        for n in ["A/a", "Principal/p", "C/c"] {
            graph.add_node(id(n));
        }
        graph.add_edge(id("A/a"), id("Principal/p"));
        graph.add_edge(id("A/a"), id("C/c"));
        graph.add_edge(id("Principal/p"), id("C/c"));

        let removed = graph.remove_matching(|n| n.contains("Principal"));

        assert_eq!(removed, vec![id("Principal/p")]);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.dependencies_of("A/a"), &[id("C/c")]);
        assert!(graph.dependencies_of("Principal/p").is_empty());
    }

    #[test]
    fn test_cycles_include_self_loops() {
        let mut graph = DependencyGraph::new();
        for n in ["A/a", "B/b", "C/c", "D/d"] {
            graph.add_node(id(n));
        }
        graph.add_edge(id("A/a"), id("B/b"));
        graph.add_edge(id("B/b"), id("A/a"));
        graph.add_edge(id("C/c"), id("C/c"));
        graph.add_edge(id("D/d"), id("A/a"));

        assert_eq!(graph.cycles(), vec![vec![id("A/a"), id("B/b")], vec![id("C/c")]]);
    }

    #[test]
    fn test_diamond_has_no_cycle() {
        let mut graph = DependencyGraph::new();
        for n in ["A", "B", "C", "D"] {
            graph.add_node(id(n));
        }
        graph.add_edge(id("A"), id("B"));
        graph.add_edge(id("A"), id("C"));
        graph.add_edge(id("B"), id("D"));
        graph.add_edge(id("C"), id("D"));

        assert!(graph.cycles().is_empty());
    }
}
