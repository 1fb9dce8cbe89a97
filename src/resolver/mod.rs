//! Dependency-reference resolution and graph construction.
//!
//! The pipeline for one manifest:
//!
//! ```text
//! resources ──► ResourceCatalog ──► GraphBuilder ──► DependencyGraph ──► TypeFilter
//!                     ▲                  │
//!                     └─ ReferenceResolver (names and dependency targets)
//! ```
//!
//! - [`reference`] normalizes raw expression strings into node labels
//! - [`catalog`] indexes declared resources by identity and explicit id
//! - [`graph_builder`] walks the resources once and emits the graph
//! - [`type_filter`] prunes node types after construction
//!
//! Nothing in this module fails: malformed expressions degrade to odd labels,
//! unresolved targets become dangling references, and a manifest without a primary
//! resource is only flagged.

pub mod catalog;
pub mod dependency_graph;
pub mod graph_builder;
pub mod reference;
pub mod type_filter;

pub use catalog::{ResourceCatalog, ResourceTypes};
pub use dependency_graph::DependencyGraph;
pub use graph_builder::{BuildOutput, GraphBuilder};
pub use reference::{ReferenceResolver, ResolverRules};
pub use type_filter::TypeFilter;
