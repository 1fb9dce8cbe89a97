//! Graph construction from a manifest.

use tracing::{debug, warn};

use super::catalog::{ResourceCatalog, ResourceTypes};
use super::dependency_graph::DependencyGraph;
use super::reference::ReferenceResolver;
use crate::core::NodeIdentity;
use crate::manifest::Resource;

/// Result of one build.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub graph: DependencyGraph,
    /// Declared type of every node, kept from the catalog.
    pub resource_types: ResourceTypes,
    /// True iff at least one resource declares no dependencies.
    pub has_primary_resource: bool,
}

/// Builds dependency graphs with a fixed resolver.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    resolver: ReferenceResolver,
}

impl GraphBuilder {
    pub fn new(resolver: ReferenceResolver) -> Self {
        Self {
            resolver,
        }
    }

    pub fn resolver(&self) -> &ReferenceResolver {
        &self.resolver
    }

    /// Build the graph of `resources` in a single pass in declaration order.
    ///
    /// A dependency that matches an explicit id registered earlier in the pass
    /// resolves to that resource; anything else, including ids declared later, is
    /// resolved as text and may dangle.
    pub fn build(&self, resources: &[Resource]) -> BuildOutput {
        let mut catalog = ResourceCatalog::new();
        let mut graph = DependencyGraph::new();
        let mut has_primary_resource = false;

        for resource in resources {
            let identity = catalog.register(&self.resolver, resource);
            if !graph.add_node(identity.clone()) {
                debug!("{} declared more than once; edges are merged", identity);
            }

            if !resource.declares_dependencies() {
                debug!("{} is a primary resource", identity);
                has_primary_resource = true;
                continue;
            }

            for raw in &resource.dependency_expressions {
                let target = match catalog.lookup_id(raw) {
                    Some(target) => {
                        debug!("{} -> {} (by id '{}')", identity, target, raw);
                        target.clone()
                    }
                    None => {
                        let target = NodeIdentity::new(self.resolver.resolve(raw));
                        debug!("{} -> {} (from '{}')", identity, target, raw);
                        target
                    }
                };
                graph.add_edge(identity.clone(), target);
            }
        }

        if !has_primary_resource && !resources.is_empty() {
            warn!("Every resource declares dependencies; the manifest has no primary resource");
        }

        BuildOutput {
            graph,
            resource_types: catalog.into_types(),
            has_primary_resource,
        }
    }
}

/// Build with the default resolver.
pub fn build(resources: &[Resource]) -> BuildOutput {
    GraphBuilder::default().build(resources)
}
