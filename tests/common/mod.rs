//! Shared testing utilities for tac0de-cascade CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated directory for input fixtures.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory holding fixtures for this test.
    pub fn dir(&self) -> &Path {
        self.root.path()
    }

    /// Write `content` to `name` inside the fixture directory and return its path.
    pub fn write_input(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write input fixture");
        path
    }

    /// Build a command for invoking the compiled binary inside the fixture directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("tac0de-cascade").expect("Failed to locate tac0de-cascade binary");
        cmd.current_dir(self.dir());
        cmd
    }

    /// Run `trace` on `path`, assert success, and parse stdout as JSON.
    pub fn trace_json(&self, path: &Path) -> serde_json::Value {
        let output = self.cli().arg("trace").arg(path).assert().success().get_output().clone();
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
    }
}
