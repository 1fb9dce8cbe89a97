use armgraph::test_utils::TemplateFixture;
use predicates::prelude::*;
use tempfile::TempDir;

use super::armgraph;

#[test]
fn test_render_writes_dot_file() {
    let temp = TempDir::new().unwrap();
    let path = TemplateFixture::web_app().write_to(temp.path()).unwrap();

    armgraph(temp.path())
        .args(["-q", "render"])
        .arg(&path)
        .args(["--output-dir", "graphs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));

    let graphs: Vec<_> = std::fs::read_dir(temp.path().join("graphs")).unwrap().collect();
    assert_eq!(graphs.len(), 1);

    let dot = std::fs::read_to_string(graphs[0].as_ref().unwrap().path()).unwrap();
    assert!(dot.contains("\"Microsoft.Web/sites/app\" -> \"Microsoft.Web/serverfarms/plan\";"));
    assert!(dot.contains(
        "\"Microsoft.Web/sites/app\" -> \"Microsoft.Storage/storageAccounts/storageName\";"
    ));
}

#[test]
fn test_render_excludes_types() {
    let temp = TempDir::new().unwrap();
    let path = TemplateFixture::with_principal().write_to(temp.path()).unwrap();

    armgraph(temp.path())
        .args(["-q", "render"])
        .arg(&path)
        .args(["--exclude-type", "Principal", "--output-dir", "out"])
        .assert()
        .success();

    let dot = std::fs::read_to_string(temp.path().join("out").join(output_file(&path))).unwrap();
    assert!(!dot.contains("Principal"));
    assert!(dot.contains("Microsoft.KeyVault/vaults/kv"));
}

#[test]
fn test_render_uses_config_file() {
    let temp = TempDir::new().unwrap();
    let path = TemplateFixture::no_primary_resource().write_to(temp.path()).unwrap();
    let config = temp.path().join("armgraph.toml");
    std::fs::write(
        &config,
        "[filter]\nexclude_types = [\"virtualNetworks\"]\n\n[render]\noutput_dir = \"from-config\"\nerror_color = \"orange\"\n",
    )
    .unwrap();

    armgraph(temp.path())
        .args(["-q", "--config"])
        .arg(&config)
        .arg("render")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("has no primary resource"));

    let dot =
        std::fs::read_to_string(temp.path().join("from-config").join(output_file(&path))).unwrap();
    assert!(!dot.contains("virtualNetworks"));
    assert!(dot.contains("fillcolor=\"orange\""));
}

#[test]
fn test_render_rejects_bad_config() {
    let temp = TempDir::new().unwrap();
    let path = TemplateFixture::web_app().write_to(temp.path()).unwrap();
    let config = temp.path().join("armgraph.toml");
    std::fs::write(&config, "[filter\n").unwrap();

    armgraph(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("render")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

fn output_file(path: &std::path::Path) -> String {
    format!("{}.dot", armgraph::render::output_name(&path.display().to_string()))
}
