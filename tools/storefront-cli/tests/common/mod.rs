//! Shared testing utilities for storefront CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for CLI invocations.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled `storefront` binary run in the work dir.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("storefront").expect("Failed to locate storefront binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    pub fn config_path(&self) -> PathBuf {
        self.work_dir().join("storefront.toml")
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Run with `--json` and parse stdout.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.cli().arg("--json").args(args).output().expect("Failed to run storefront");
        assert!(output.status.success(), "storefront {:?} failed: {:?}", args, output);
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}
