use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::config::{Config, DEFAULT_FILES, LoadResult};
use crate::{EXIT_INVALID_YAML, EXIT_SUCCESS, YamlGuardError};

/// Loader with a fixed file list; explicit paths are always reported missing.
struct StubLoader {
    files: Vec<String>,
}

impl ConfigLoader for StubLoader {
    fn load(&self) -> Result<LoadResult> {
        Ok(LoadResult {
            config: Config {
                files: self.files.clone(),
            },
            source: Some(PathBuf::from(".yaml-guard.toml")),
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        Err(YamlGuardError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )))
    }
}

fn stub(files: &[&str]) -> StubLoader {
    StubLoader {
        files: files.iter().map(ToString::to_string).collect(),
    }
}

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["yaml-guard"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

fn path_in(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

#[test]
fn resolve_prefers_command_line_files() {
    let files = resolve_files(&cli(&["x.yaml"]), &stub(&["from-config.yaml"])).unwrap();
    assert_eq!(files, vec!["x.yaml"]);
}

#[test]
fn resolve_uses_config_when_no_files_given() {
    let files = resolve_files(&cli(&[]), &stub(&["from-config.yaml"])).unwrap();
    assert_eq!(files, vec!["from-config.yaml"]);
}

#[test]
fn resolve_no_config_uses_builtin_list() {
    let files = resolve_files(&cli(&["--no-config"]), &stub(&["from-config.yaml"])).unwrap();
    assert_eq!(files, DEFAULT_FILES);
}

#[test]
fn resolve_explicit_config_errors_propagate() {
    let err = resolve_files(&cli(&["--config", "nope.toml"]), &stub(&[])).unwrap_err();
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn run_mixed_outcomes_exits_one() {
    let dir = TempDir::new().unwrap();
    let a = path_in(&dir, "a.yaml");
    let b = path_in(&dir, "b.yaml");
    let c = path_in(&dir, "c.yaml");
    fs::write(&a, "x: 1\n").unwrap();
    fs::write(&c, "x: [\n").unwrap();

    let mut out = Vec::new();
    let args = cli(&["--color", "never", a.as_str(), b.as_str(), c.as_str()]);
    let code = run_validate_impl(&args, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(code, EXIT_INVALID_YAML);
    let a_at = output.find(&format!("✓ Valid: {a}")).unwrap();
    let b_at = output.find(&format!("⚠ Missing: {b}")).unwrap();
    let c_at = output.find(&format!("✗ Invalid: {c}")).unwrap();
    assert!(a_at < b_at && b_at < c_at);
    assert!(output.contains("  Error: "));
    assert!(output.contains("✗ Errors: 1\n⚠ Warnings: 1\n✓ Valid: 1\n"));
}

#[test]
fn run_all_valid_exits_zero() {
    let dir = TempDir::new().unwrap();
    let a = path_in(&dir, "a.yaml");
    fs::write(&a, "name: app\n").unwrap();

    let mut out = Vec::new();
    let args = cli(&["--color", "never", a.as_str()]);
    let code = run_validate_impl(&args, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(code, EXIT_SUCCESS);
    assert!(output.contains("✅ All YAML files are valid!"));
    assert!(output.contains("Validated 1 files successfully."));
}

#[test]
fn run_json_format() {
    let dir = TempDir::new().unwrap();
    let a = path_in(&dir, "a.yaml");
    fs::write(&a, "- one\n- two\n").unwrap();
    let missing = path_in(&dir, "missing.yaml");

    let mut out = Vec::new();
    let args = cli(&["--format", "json", a.as_str(), missing.as_str()]);
    let code = run_validate_impl(&args, &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(json["summary"]["valid"], 1);
    assert_eq!(json["summary"]["missing"], 1);
    assert_eq!(json["results"][1]["status"], "missing");
}
