//! Integration tests driving the `armgraph` binary.

mod check;
mod render;

use assert_cmd::Command;
use std::path::Path;

/// `armgraph` isolated from the user's configuration and terminal colors.
pub fn armgraph(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("armgraph").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("ARMGRAPH_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}
