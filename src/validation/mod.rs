//! Structural checks over finished dependency graphs.
//!
//! Validators are pluggable: anything implementing [`GraphValidator`] can be run
//! against a graph and the type index produced by the build. Validators only flag
//! nodes; they never change the graph.
//!
//! Built-in validators:
//! - [`DanglingReferenceValidator`] flags resources that depend on an identity no
//!   resource declares
//! - [`CycleValidator`] flags every resource on a dependency cycle
//!
//! [`ValidatorSet::standard`] runs both.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::core::NodeIdentity;
use crate::resolver::{DependencyGraph, ResourceTypes};

/// A node reported by a validator, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct FlaggedNode {
    pub node: NodeIdentity,
    pub message: String,
}

impl FlaggedNode {
    pub fn new(node: NodeIdentity, message: impl Into<String>) -> Self {
        Self {
            node,
            message: message.into(),
        }
    }
}

/// Capability to check a built graph.
pub trait GraphValidator {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Return zero or more flagged nodes.
    fn validate(&self, graph: &DependencyGraph, resource_types: &ResourceTypes) -> Vec<FlaggedNode>;
}

/// Flags each dependent whose target is not a declared node.
#[derive(Debug, Default, Clone, Copy)]
pub struct DanglingReferenceValidator;

impl GraphValidator for DanglingReferenceValidator {
    fn name(&self) -> &str {
        "dangling-reference"
    }

    fn validate(&self, graph: &DependencyGraph, _resource_types: &ResourceTypes) -> Vec<FlaggedNode> {
        let unique: BTreeSet<(&NodeIdentity, &NodeIdentity)> =
            graph.dangling_references().into_iter().collect();

        unique
            .into_iter()
            .map(|(from, to)| FlaggedNode::new(from.clone(), format!("depends on undeclared resource '{to}'")))
            .collect()
    }
}

/// Flags every declared node that takes part in a cycle, self-loops included.
#[derive(Debug, Default, Clone, Copy)]
pub struct CycleValidator;

impl GraphValidator for CycleValidator {
    fn name(&self) -> &str {
        "cycle"
    }

    fn validate(&self, graph: &DependencyGraph, _resource_types: &ResourceTypes) -> Vec<FlaggedNode> {
        let mut flagged = Vec::new();
        for cycle in graph.cycles() {
            let chain = cycle.iter().map(NodeIdentity::as_str).collect::<Vec<_>>().join(" → ");
            for node in cycle.iter().filter(|n| graph.contains_node(n.as_str())) {
                flagged.push(FlaggedNode::new(node.clone(), format!("circular dependency: {chain}")));
            }
        }
        flagged
    }
}

/// Runs several validators in order and concatenates their findings.
#[derive(Default)]
pub struct ValidatorSet {
    validators: Vec<Box<dyn GraphValidator>>,
}

impl ValidatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dangling references, then cycles.
    pub fn standard() -> Self {
        Self::new().with(DanglingReferenceValidator).with(CycleValidator)
    }

    #[must_use]
    pub fn with(mut self, validator: impl GraphValidator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl GraphValidator for ValidatorSet {
    fn name(&self) -> &str {
        "validator-set"
    }

    fn validate(&self, graph: &DependencyGraph, resource_types: &ResourceTypes) -> Vec<FlaggedNode> {
        self.validators
            .iter()
            .flat_map(|validator| {
                let flagged = validator.validate(graph, resource_types);
                tracing::debug!("{} flagged {} node(s)", validator.name(), flagged.len());
                flagged
            })
            .collect()
    }
}
