//! Per-node color and label hints.

use sha2::{Digest, Sha256};
use std::collections::HashMap;

use crate::core::NodeIdentity;
use crate::resolver::{DependencyGraph, ResourceTypes};
use crate::validation::FlaggedNode;

/// Color used for flagged nodes unless configured otherwise.
pub const DEFAULT_ERROR_COLOR: &str = "red";

/// Fallback for nodes with no recorded type.
const UNTYPED_COLOR: &str = "#BBBBBB";

/// Rendering hint for a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStyle {
    pub color: String,
    /// Replaces the identity as the node label when set.
    pub label: Option<String>,
}

/// Styles for one render call, keyed by node identity.
///
/// Built fresh for every graph; type colors are derived from the type string so
/// the same type gets the same color in every render.
#[derive(Debug, Clone, Default)]
pub struct NodeStyles {
    styles: HashMap<NodeIdentity, NodeStyle>,
}

impl NodeStyles {
    /// Assign a style to every declared node of `graph`.
    ///
    /// Flagged nodes take `error_color` and an `Error: <message>` label; when a node
    /// is flagged more than once the messages are joined.
    pub fn build(
        graph: &DependencyGraph,
        resource_types: &ResourceTypes,
        flagged: &[FlaggedNode],
        error_color: &str,
    ) -> Self {
        let mut type_colors: HashMap<&str, String> = HashMap::new();
        let mut styles = HashMap::new();

        for node in graph.nodes() {
            let messages: Vec<&str> =
                flagged.iter().filter(|f| &f.node == node).map(|f| f.message.as_str()).collect();

            let style = if messages.is_empty() {
                let color = match resource_types.get(node) {
                    Some(resource_type) => type_colors
                        .entry(resource_type.as_str())
                        .or_insert_with(|| type_color(resource_type))
                        .clone(),
                    None => UNTYPED_COLOR.to_string(),
                };
                NodeStyle {
                    color,
                    label: None,
                }
            } else {
                NodeStyle {
                    color: error_color.to_string(),
                    label: Some(format!("Error: {}", messages.join("; "))),
                }
            };
            styles.insert(node.clone(), style);
        }

        Self {
            styles,
        }
    }

    pub fn get(&self, node: &str) -> Option<&NodeStyle> {
        self.styles.get(node)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// `#RRGGBB` color derived from the first bytes of the type's SHA-256.
pub fn type_color(resource_type: &str) -> String {
    let digest = Sha256::digest(resource_type.as_bytes());
    format!("#{}", hex::encode_upper(&digest[..3]))
}
