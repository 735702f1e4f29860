//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch project directory with a manifest and an event payload
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestProject {
  /// Create an empty project directory
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Create a project whose package.json declares `version`
  pub fn with_package_json(version: &str) -> Result<Self> {
    let project = Self::new()?;
    project.write_file(
      "package.json",
      &format!(
        r#"{{
  "name": "widget",
  "version": "{}",
  "main": "index.js"
}}
"#,
        version
      ),
    )?;
    Ok(project)
  }

  /// Write a GitHub `release` event payload and return its path
  pub fn write_event(&self, tag: &str, draft: bool, prerelease: bool) -> Result<PathBuf> {
    let payload = serde_json::json!({
      "action": "published",
      "release": {
        "draft": draft,
        "prerelease": prerelease,
        "tag_name": tag,
        "name": tag,
      },
      "repository": { "full_name": "acme/widget" },
    });

    let path = self.path.join("event.json");
    std::fs::write(&path, serde_json::to_string_pretty(&payload)?)?;
    Ok(path)
  }

  /// Write a file relative to the project root
  pub fn write_file(&self, relative: &str, content: &str) -> Result<()> {
    let path = self.path.join(relative);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
  }

  /// Read a file relative to the project root
  pub fn read_file(&self, relative: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(relative))?)
  }

  /// Check if a file exists
  pub fn file_exists(&self, relative: &str) -> bool {
    self.path.join(relative).exists()
  }
}

/// Run the release-gate binary with a clean GitHub environment plus `envs`
///
/// Returns the output whatever the exit status; callers assert on it.
pub fn run_release_gate(cwd: &Path, args: &[&str], envs: &[(&str, &PathBuf)]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_release-gate");

  let mut command = Command::new(bin);
  command
    .current_dir(cwd)
    .args(args)
    .env_remove("GITHUB_EVENT_PATH")
    .env_remove("GITHUB_OUTPUT")
    .env_remove("RELEASE_GATE_LOG");

  for (key, value) in envs {
    command.env(key, value);
  }

  command.output().context("Failed to run release-gate")
}

pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).to_string()
}
