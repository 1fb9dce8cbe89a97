use armgraph::core::NodeIdentity;
use armgraph::manifest::Resource;
use armgraph::resolver::{GraphBuilder, TypeFilter};
use armgraph::test_utils::{TemplateFixture, init_test_logging};
use std::collections::HashSet;

fn build(resources: &[Resource]) -> armgraph::resolver::BuildOutput {
    init_test_logging(None);
    GraphBuilder::default().build(resources)
}

#[test]
fn test_node_count_matches_resource_count() {
    let manifest = TemplateFixture::web_app().manifest();
    let output = build(&manifest.resources);
    assert_eq!(output.graph.node_count(), manifest.resources.len());
}

#[test]
fn test_distinct_type_and_name_give_distinct_identities() {
    let resources = vec![
        Resource::new("Microsoft.Web/sites", "app"),
        Resource::new("Microsoft.Web/serverfarms", "app"),
        Resource::new("Microsoft.Web/sites", "api"),
    ];
    let output = build(&resources);
    let identities: HashSet<&NodeIdentity> = output.graph.nodes().collect();
    assert_eq!(identities.len(), 3);
}

#[test]
fn test_single_resource_without_dependencies_is_primary() {
    let resources = vec![
        Resource::new("A", "root"),
        Resource::new("B", "b").depends_on("A/root"),
        Resource::new("C", "c").depends_on("B/b"),
    ];
    assert!(build(&resources).has_primary_resource);
}

#[test]
fn test_fixture_without_primary_resource() {
    let output = build(&TemplateFixture::no_primary_resource().manifest().resources);
    assert!(!output.has_primary_resource);
    assert_eq!(output.graph.dangling_references().len(), 1);
}

#[test]
fn test_id_precedence_over_literal_name() {
    // The id collides with the literal name of a different resource; the id wins.
    let resources = vec![
        Resource::new("Microsoft.Storage/storageAccounts", "logs").with_id("abc"),
        Resource::new("Other/kind", "abc"),
        Resource::new("Microsoft.Web/sites", "app").depends_on("abc"),
    ];
    let output = build(&resources);
    assert_eq!(
        output.graph.dependencies_of("Microsoft.Web/sites/app"),
        &[NodeIdentity::from("Microsoft.Storage/storageAccounts/logs")]
    );
}

#[test]
fn test_forward_id_reference_is_not_resolved_by_id() {
    let resources = vec![
        Resource::new("Microsoft.Web/sites", "app").depends_on("abc"),
        Resource::new("Microsoft.Storage/storageAccounts", "logs").with_id("abc"),
    ];
    let output = build(&resources);
    assert_eq!(output.graph.dependencies_of("Microsoft.Web/sites/app"), &[NodeIdentity::from("abc")]);
    assert!(!output.graph.contains_node("abc"));
}

#[test]
fn test_filter_completeness() {
    let mut graph = build(&TemplateFixture::with_principal().manifest().resources).graph;
    TypeFilter::new(["Principal"]).apply(&mut graph);

    assert!(graph.nodes().all(|n| !n.contains("Principal")));
    for (from, to) in graph.edges() {
        assert!(!from.contains("Principal"));
        assert!(!to.contains("Principal"));
    }
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_build_is_independent_per_manifest() {
    let builder = GraphBuilder::default();
    let first = builder.build(&[Resource::new("A", "a").with_id("shared")]);
    let second = builder.build(&[Resource::new("B", "b").depends_on("shared")]);

    assert_eq!(first.graph.node_count(), 1);
    // The id registered while building the first manifest is not visible here.
    assert_eq!(second.graph.dependencies_of("B/b"), &[NodeIdentity::from("shared")]);
}
