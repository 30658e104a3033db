//! Shared testing utilities for boot CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const WALLY_TOML: &str = r#"[package]
name = "studio/arena"
version = "0.1.0"
registry = "https://github.com/UpliftGames/wally-index"
realm = "shared"

[dependencies]
Maid = "nightcycle/maid@1.1.4"
"#;

pub const PROJECT_JSON: &str = r#"{
  "name": "arena",
  "tree": { "$className": "DataModel" }
}"#;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `boot` binary within the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("boot").expect("Failed to locate boot binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the project root.
    pub fn write(&self, path: &str, content: &str) {
        let full = self.work_dir.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(full, content).expect("Failed to write test file");
    }

    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.work_dir.join(path)).expect("Failed to read test file")
    }

    pub fn exists(&self, path: &str) -> bool {
        self.work_dir.join(path).exists()
    }

    /// Seed the Rojo, Wally and Aftman markers `build` requires.
    pub fn write_project_markers(&self) {
        self.write("default.project.json", PROJECT_JSON);
        self.write("wally.toml", WALLY_TOML);
        self.write("aftman.toml", "[tools]\nrojo = \"rojo-rbx/rojo@7.4.0\"\n");
    }

    pub fn init(&self) {
        self.cli().arg("init").assert().success();
    }
}
