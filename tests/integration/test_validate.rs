//! Integration tests for `release-gate validate`

use crate::helpers::{TestProject, run_release_gate, stderr, stdout};
use anyhow::Result;

const VALIDATION_FAILED: i32 = 3;
const INPUT_ERROR: i32 = 1;

#[test]
fn test_stable_release_writes_github_outputs() -> Result<()> {
  let project = TestProject::with_package_json("1.2.3")?;
  let event = project.write_event("v1.2.3", false, false)?;
  let output_file = project.path.join("github_output");

  let output = run_release_gate(
    &project.path,
    &["validate"],
    &[("GITHUB_EVENT_PATH", &event), ("GITHUB_OUTPUT", &output_file)],
  )?;

  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert_eq!(project.read_file("github_output")?, "version=1.2.3\ntag=\n");

  Ok(())
}

#[test]
fn test_prerelease_writes_first_identifier_as_tag() -> Result<()> {
  let project = TestProject::with_package_json("1.2.3-beta.1")?;
  let event = project.write_event("v1.2.3-beta.1", false, true)?;
  let output_file = project.path.join("github_output");

  let output = run_release_gate(
    &project.path,
    &["validate"],
    &[("GITHUB_EVENT_PATH", &event), ("GITHUB_OUTPUT", &output_file)],
  )?;

  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert_eq!(project.read_file("github_output")?, "version=1.2.3-beta.1\ntag=beta\n");

  Ok(())
}

#[test]
fn test_draft_is_rejected_with_error_annotation() -> Result<()> {
  let project = TestProject::with_package_json("1.2.3")?;
  let event = project.write_event("v1.2.3", true, false)?;
  let output_file = project.path.join("github_output");

  let output = run_release_gate(
    &project.path,
    &["validate"],
    &[("GITHUB_EVENT_PATH", &event), ("GITHUB_OUTPUT", &output_file)],
  )?;

  assert_eq!(output.status.code(), Some(VALIDATION_FAILED));
  assert_eq!(stdout(&output), "::error::release is a draft; skip publish.\n");
  assert!(!project.file_exists("github_output"), "no outputs on failure");

  Ok(())
}

#[test]
fn test_tag_without_v_prefix() -> Result<()> {
  let project = TestProject::with_package_json("1.2.3")?;

  let output = run_release_gate(&project.path, &["validate", "--tag", "1.2.3"], &[])?;

  assert_eq!(output.status.code(), Some(VALIDATION_FAILED));
  assert!(stderr(&output).contains("release tag does not start with `v`"));

  Ok(())
}

#[test]
fn test_mismatch_reports_both_versions() -> Result<()> {
  let project = TestProject::with_package_json("4.5.6")?;
  let event = project.write_event("v1.2.3", false, false)?;

  let output = run_release_gate(
    &project.path,
    &["validate", "--event", "event.json"],
    &[("GITHUB_EVENT_PATH", &event)],
  )?;

  assert_eq!(output.status.code(), Some(VALIDATION_FAILED));
  let err = stderr(&output);
  assert!(err.contains("tag=1.2.3"), "stderr: {}", err);
  assert!(err.contains("manifest=4.5.6"), "stderr: {}", err);

  Ok(())
}

#[test]
fn test_invalid_semver() -> Result<()> {
  let project = TestProject::with_package_json("a.b.c")?;

  let output = run_release_gate(&project.path, &["validate", "--tag", "va.b.c", "--json"], &[])?;

  assert_eq!(output.status.code(), Some(VALIDATION_FAILED));
  let value: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  assert_eq!(value["status"], "failure");
  assert_eq!(value["kind"], "invalid-semver");
  assert_eq!(value["reason"], "tag/manifest version is not valid semver.");

  Ok(())
}

#[test]
fn test_prerelease_flag_mismatches() -> Result<()> {
  let project = TestProject::with_package_json("1.2.3")?;
  let output = run_release_gate(&project.path, &["validate", "--tag", "v1.2.3", "--prerelease"], &[])?;
  assert_eq!(output.status.code(), Some(VALIDATION_FAILED));
  assert!(stderr(&output).contains("marked as pre-release but version has no pre-release identifier"));

  let project = TestProject::with_package_json("1.2.3-beta.1")?;
  let output = run_release_gate(&project.path, &["validate", "--tag", "v1.2.3-beta.1"], &[])?;
  assert_eq!(output.status.code(), Some(VALIDATION_FAILED));
  assert!(stderr(&output).contains("not marked as pre-release but version has a pre-release identifier."));

  Ok(())
}

#[test]
fn test_missing_manifest_version() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("package.json", r#"{ "name": "widget" }"#)?;

  let output = run_release_gate(&project.path, &["validate", "--tag", "not-a-tag", "--json"], &[])?;

  assert_eq!(output.status.code(), Some(VALIDATION_FAILED));
  let value: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  assert_eq!(value["reason"], "manifest is missing a version.");

  Ok(())
}

#[test]
fn test_cargo_manifest_with_workspace_version() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file(
    "Cargo.toml",
    r#"[workspace]
members = ["."]

[workspace.package]
version = "0.7.0-alpha.3"

[package]
name = "widget"
version.workspace = true
"#,
  )?;

  let output = run_release_gate(
    &project.path,
    &[
      "validate",
      "--manifest",
      "Cargo.toml",
      "--tag",
      "v0.7.0-alpha.3",
      "--prerelease",
      "--json",
    ],
    &[],
  )?;

  assert!(output.status.success(), "stderr: {}", stderr(&output));
  let value: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  assert_eq!(value["status"], "success");
  assert_eq!(value["version"], "0.7.0-alpha.3");
  assert_eq!(value["tag"], "alpha");

  Ok(())
}

#[test]
fn test_config_file_sets_manifest_and_output_names() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("web/package.json", r#"{ "version": "2.0.0" }"#)?;
  project.write_file(
    "release-gate.toml",
    r#"[manifest]
path = "web/package.json"

[outputs]
version = "release_version"
tag = "dist_tag"
"#,
  )?;

  let output = run_release_gate(
    &project.path,
    &["validate", "--tag", "v2.0.0", "--github-output", "out.txt"],
    &[],
  )?;

  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert_eq!(project.read_file("out.txt")?, "release_version=2.0.0\ndist_tag=\n");

  Ok(())
}

#[test]
fn test_text_output_on_success() -> Result<()> {
  let project = TestProject::with_package_json("3.1.4")?;

  let output = run_release_gate(&project.path, &["validate", "--tag", "v3.1.4"], &[])?;

  assert!(output.status.success(), "stderr: {}", stderr(&output));
  let out = stdout(&output);
  assert!(out.contains("version: 3.1.4"));
  assert!(out.contains("stable release"));

  Ok(())
}

#[test]
fn test_missing_manifest_file_is_input_error() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_release_gate(&project.path, &["validate", "--tag", "v1.2.3"], &[])?;

  assert_eq!(output.status.code(), Some(INPUT_ERROR));
  assert!(stderr(&output).contains("Failed to load manifest"));

  Ok(())
}

#[test]
fn test_non_release_payload_is_input_error() -> Result<()> {
  let project = TestProject::with_package_json("1.2.3")?;
  project.write_file("push.json", r#"{ "ref": "refs/heads/main" }"#)?;

  let output = run_release_gate(&project.path, &["validate", "--event", "push.json"], &[])?;

  assert_eq!(output.status.code(), Some(INPUT_ERROR));
  assert!(stderr(&output).contains("no `release` object"));

  Ok(())
}

#[test]
fn test_no_event_source_is_input_error() -> Result<()> {
  let project = TestProject::with_package_json("1.2.3")?;

  let output = run_release_gate(&project.path, &["validate"], &[])?;

  assert_eq!(output.status.code(), Some(INPUT_ERROR));
  assert!(stderr(&output).contains("No release event available"));

  Ok(())
}
