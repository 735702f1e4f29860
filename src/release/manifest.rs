//! Manifest version lookup
//!
//! Only the declared `version` is consulted. Two manifest flavours are understood:
//! - `package.json` (or any other `.json` file): top-level `"version"`
//! - `Cargo.toml` (or any other `.toml` file): `[package].version`, following
//!   `version.workspace = true` to `[workspace.package].version`
//!
//! A version that is missing, empty or not a string is reported as absent; deciding
//! what that means is left to the validator.

use crate::core::error::{GateError, GateResult, InputError};
use std::path::{Path, PathBuf};
use toml_edit::{DocumentMut, Item};

/// Default manifest location, relative to the working directory
pub const DEFAULT_MANIFEST_PATH: &str = "package.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
  /// npm-style JSON manifest
  Json,
  /// Cargo-style TOML manifest
  Toml,
}

impl ManifestKind {
  /// Detect the manifest flavour from its file extension (JSON unless `.toml`)
  pub fn detect(path: &Path) -> Self {
    match path.extension().and_then(|e| e.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("toml") => ManifestKind::Toml,
      _ => ManifestKind::Json,
    }
  }
}

/// A loaded manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
  pub path: PathBuf,
  pub kind: ManifestKind,
  pub version: Option<String>,
}

impl Manifest {
  /// Read the manifest at `path` and extract its version
  pub fn load(path: &Path) -> GateResult<Self> {
    tracing::debug!(path = %path.display(), "reading manifest");

    let unreadable = |reason: String| {
      GateError::Input(InputError::UnreadableManifest {
        path: path.to_path_buf(),
        reason,
      })
    };

    let content = std::fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
    let kind = ManifestKind::detect(path);
    let version = parse_version(&content, kind).map_err(unreadable)?;

    tracing::debug!(?kind, version = ?version, "manifest loaded");

    Ok(Self {
      path: path.to_path_buf(),
      kind,
      version,
    })
  }

  /// Declared version, if any
  pub fn version(&self) -> Option<&str> {
    self.version.as_deref()
  }
}

/// Extract the declared version from manifest content
pub fn parse_version(content: &str, kind: ManifestKind) -> Result<Option<String>, String> {
  let version = match kind {
    ManifestKind::Json => json_version(content)?,
    ManifestKind::Toml => toml_version(content)?,
  };

  Ok(version.filter(|v| !v.is_empty()))
}

fn json_version(content: &str) -> Result<Option<String>, String> {
  let value: serde_json::Value = serde_json::from_str(content).map_err(|e| format!("invalid JSON: {}", e))?;

  Ok(value.get("version").and_then(|v| v.as_str()).map(String::from))
}

fn toml_version(content: &str) -> Result<Option<String>, String> {
  let doc: DocumentMut = content.parse().map_err(|e| format!("invalid TOML: {}", e))?;

  let workspace_version = || {
    doc
      .get("workspace")
      .and_then(|w| w.get("package"))
      .and_then(|p| p.get("version"))
      .and_then(Item::as_str)
      .map(String::from)
  };

  let Some(package) = doc.get("package") else {
    // Virtual manifest: only the shared workspace version can apply
    return Ok(workspace_version());
  };

  let Some(version) = package.get("version") else {
    return Ok(None);
  };

  if let Some(version) = version.as_str() {
    return Ok(Some(version.to_string()));
  }

  let inherits = version.get("workspace").and_then(Item::as_bool).unwrap_or(false);
  Ok(if inherits { workspace_version() } else { None })
}
