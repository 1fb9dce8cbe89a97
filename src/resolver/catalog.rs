//! Per-build index of declared resources.

use std::collections::HashMap;

use tracing::debug;

use super::reference::ReferenceResolver;
use crate::core::NodeIdentity;
use crate::manifest::Resource;

/// Resource type of every declared node, keyed by identity.
pub type ResourceTypes = HashMap<NodeIdentity, String>;

/// Index from explicit ids and identities to what was declared.
///
/// A catalog lives for one build: it is filled in declaration order while the
/// builder resolves dependency targets, so an id is only visible to resources
/// declared at or after the resource that introduces it.
#[derive(Debug, Default)]
pub struct ResourceCatalog {
    type_of: ResourceTypes,
    id_to_identity: HashMap<String, NodeIdentity>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `resource` and return its identity.
    ///
    /// A later resource reusing an explicit id replaces the earlier mapping.
    pub fn register(&mut self, resolver: &ReferenceResolver, resource: &Resource) -> NodeIdentity {
        let identity = NodeIdentity::for_resource(
            &resource.resource_type,
            &resolver.resolve(&resource.declared_name),
        );

        self.type_of.insert(identity.clone(), resource.resource_type.clone());
        if let Some(id) = &resource.explicit_id {
            debug!("Registered id '{}' for {}", id, identity);
            self.id_to_identity.insert(id.clone(), identity.clone());
        }

        identity
    }

    /// Exact-match lookup of an explicit id registered so far.
    pub fn lookup_id(&self, id: &str) -> Option<&NodeIdentity> {
        self.id_to_identity.get(id)
    }

    pub fn type_of(&self, identity: &NodeIdentity) -> Option<&str> {
        self.type_of.get(identity).map(String::as_str)
    }

    /// Consume the catalog, keeping the identity-to-type map for validation and
    /// rendering.
    pub fn into_types(self) -> ResourceTypes {
        self.type_of
    }
}
