//! armgraph - dependency graphs for deployment templates
//!
//! Deployment templates declare resources whose `dependsOn` entries are free-form
//! template expressions (`[resourceId('Microsoft.Storage/storageAccounts',
//! parameters('storageName'))]`), plain names, or the explicit ids of other
//! resources. armgraph resolves each of them to a canonical node identity,
//! assembles a directed graph per manifest, checks it, and hands it to a renderer.
//!
//! # Architecture Overview
//!
//! ```text
//! source ──► manifest ──► resolver ──► validation ──► render
//!   (.json / .csv)        (catalog, builder,           (styles, DOT)
//!                          type filter)      └──► report
//! ```
//!
//! # Core Modules
//!
//! - [`resolver`] - reference resolution, resource catalog, graph builder, type filter
//! - [`validation`] - pluggable structural validators
//! - [`render`] - node styles, output names and the DOT renderer
//! - [`pipeline`] - one manifest from build to report
//!
//! ## Supporting Modules
//! - [`core`] - error types and [`core::NodeIdentity`]
//! - [`manifest`] - the parsed manifest model
//! - [`source`] - document and run-log input channels
//! - [`config`] - configuration file
//! - [`report`] - advisory text and JSON reports
//! - [`cli`] - command-line interface
//!
//! # Example
//!
//! ```rust
//! use armgraph::manifest::Resource;
//! use armgraph::resolver::GraphBuilder;
//!
//! let resources = vec![
//!     Resource::new("Microsoft.Storage/storageAccounts", "[parameters('storageName')]"),
//!     Resource::new("Microsoft.Web/sites", "app").depends_on(
//!         "[resourceId('Microsoft.Storage/storageAccounts', parameters('storageName'))]",
//!     ),
//! ];
//!
//! let output = GraphBuilder::default().build(&resources);
//! assert_eq!(output.graph.node_count(), 2);
//! assert!(output.graph.dangling_references().is_empty());
//! assert!(output.has_primary_resource);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod manifest;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod resolver;
pub mod source;
pub mod validation;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
