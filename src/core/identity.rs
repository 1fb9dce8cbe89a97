//! Canonical node identities.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// Canonical `"<type>/<resolvedName>"` key of a graph node.
///
/// Identities are the only key used for graph membership, coloring and error
/// reporting. Edge targets produced by the text heuristic are also identities, even
/// when they do not start with a resource type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeIdentity(String);

impl NodeIdentity {
    /// Identity of a declared resource: its type joined to its resolved name.
    pub fn for_resource(resource_type: &str, resolved_name: &str) -> Self {
        Self(format!("{resource_type}/{resolved_name}"))
    }

    /// Wrap an already-normalized string.
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `needle` occurs anywhere in the identity.
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl fmt::Display for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeIdentity {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeIdentity {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeIdentity {
    fn from(value: String) -> Self {
        Self(value)
    }
}
