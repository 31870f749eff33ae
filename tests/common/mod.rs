#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the yaml-guard binary.
#[macro_export]
macro_rules! yaml_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("yaml-guard"))
    };
}

/// Temporary project directory used as the working directory of the binary.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a `.yaml-guard.toml` listing `files`.
    pub fn create_config(&self, files: &[&str]) {
        let quoted: Vec<String> = files.iter().map(|f| format!("\"{f}\"")).collect();
        self.create_file(
            ".yaml-guard.toml",
            &format!("files = [{}]\n", quoted.join(", ")),
        );
    }

    /// Populates every file of the built-in list with valid YAML.
    pub fn create_default_project(&self) {
        self.create_file("melos.yaml", "name: skwark\npackages:\n  - apps/**\n");
        self.create_file(
            "pubspec.yaml",
            "name: skwark_workspace\nenvironment:\n  sdk: '>=3.0.0 <4.0.0'\n",
        );
        self.create_file("apps/skwark/pubspec.yaml", "name: skwark\nversion: 1.0.0+1\n");
        self.create_file(
            "apps/skwark/analysis_options.yaml",
            "include: package:flutter_lints/flutter.yaml\n",
        );
        self.create_file(
            ".github/workflows/build.yml",
            "name: build\non: [push]\njobs:\n  build:\n    runs-on: ubuntu-latest\n",
        );
        self.create_file(
            ".github/workflows/quick-check.yml",
            "name: quick-check\non:\n  pull_request:\n",
        );
    }
}
