use crate::core::error::{ConfigError, GateError, GateResult, ResultExt};
use crate::release::manifest::DEFAULT_MANIFEST_PATH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for release-gate
/// Searched in order: release-gate.toml, .release-gate.toml, .config/release-gate.toml
///
/// Every section is optional; a missing file means defaults everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
  #[serde(default)]
  pub manifest: ManifestConfig,
  #[serde(default)]
  pub outputs: OutputsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
  /// Manifest path relative to the working directory (default: package.json)
  #[serde(default = "default_manifest_path")]
  pub path: PathBuf,
}

fn default_manifest_path() -> PathBuf {
  PathBuf::from(DEFAULT_MANIFEST_PATH)
}

impl Default for ManifestConfig {
  fn default() -> Self {
    Self {
      path: default_manifest_path(),
    }
  }
}

/// Names of the outputs written on success
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputsConfig {
  #[serde(default = "default_version_output")]
  pub version: String,
  #[serde(default = "default_tag_output")]
  pub tag: String,
}

fn default_version_output() -> String {
  "version".to_string()
}

fn default_tag_output() -> String {
  "tag".to_string()
}

impl Default for OutputsConfig {
  fn default() -> Self {
    Self {
      version: default_version_output(),
      tag: default_tag_output(),
    }
  }
}

impl OutputsConfig {
  /// Validate output names
  ///
  /// Names end up as `name=value` lines in the GitHub output file, so they must be
  /// non-empty, distinct, and free of `=` and line breaks.
  pub fn validate(&self) -> GateResult<()> {
    for (field, name) in [("outputs.version", &self.version), ("outputs.tag", &self.tag)] {
      let reason = if name.trim().is_empty() {
        Some("output name must not be empty")
      } else if name.contains('=') {
        Some("output name must not contain '='")
      } else if name.contains(['\n', '\r']) {
        Some("output name must not contain line breaks")
      } else {
        None
      };

      if let Some(reason) = reason {
        return Err(GateError::Config(ConfigError::InvalidValue {
          field: field.to_string(),
          reason: reason.to_string(),
        }));
      }
    }

    if self.version == self.tag {
      return Err(GateError::Config(ConfigError::InvalidValue {
        field: "outputs".to_string(),
        reason: format!("version and tag outputs share the name '{}'", self.version),
      }));
    }

    Ok(())
  }
}

impl GateConfig {
  /// Find config file in search order
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join("release-gate.toml"),
      path.join(".release-gate.toml"),
      path.join(".config").join("release-gate.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config for a working directory, falling back to defaults when no file exists
  pub fn discover(path: &Path) -> GateResult<Self> {
    match Self::find_config_path(path) {
      Some(config_path) => Self::load_file(&config_path),
      None => {
        tracing::debug!(dir = %path.display(), "no release-gate config found, using defaults");
        Ok(Self::default())
      }
    }
  }

  /// Load config from an explicit file
  pub fn load_file(config_path: &Path) -> GateResult<Self> {
    if !config_path.exists() {
      return Err(GateError::Config(ConfigError::NotFound {
        path: config_path.to_path_buf(),
      }));
    }

    tracing::debug!(path = %config_path.display(), "loading config");

    let content = fs::read_to_string(config_path)
      .map_err(|e| GateError::message(format!("Failed to read config from {}: {}", config_path.display(), e)))?;
    let config = Self::parse(&content).with_context(|| format!("Invalid config in {}", config_path.display()))?;

    Ok(config)
  }

  /// Parse and validate config content
  pub fn parse(content: &str) -> GateResult<Self> {
    let config: GateConfig = toml_edit::de::from_str(content)?;
    config.validate()?;
    Ok(config)
  }

  /// Validate the whole configuration
  pub fn validate(&self) -> GateResult<()> {
    if self.manifest.path.as_os_str().is_empty() {
      return Err(GateError::Config(ConfigError::InvalidValue {
        field: "manifest.path".to_string(),
        reason: "manifest path must not be empty".to_string(),
      }));
    }

    self.outputs.validate()
  }

  /// Manifest path to use: CLI flag wins over config
  pub fn manifest_path(&self, cli_override: Option<&Path>) -> PathBuf {
    cli_override.map(Path::to_path_buf).unwrap_or_else(|| self.manifest.path.clone())
  }
}
