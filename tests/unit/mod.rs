//! Library-level tests of the resolution and graph-construction properties.

mod graph_properties;
mod resolver_properties;
