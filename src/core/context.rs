//! Invocation context - build once in main, pass to the command
//!
//! Holds the working directory, the resolved configuration and the environment
//! values the boundary layer reads. Capturing the environment here keeps the
//! commands free of `std::env` lookups, so tests can hand them any environment.

use crate::core::config::GateConfig;
use crate::core::error::GateResult;
use crate::outputs::github::OUTPUT_PATH_ENV;
use crate::release::event::EVENT_PATH_ENV;
use std::path::{Path, PathBuf};

/// Environment values consulted by release-gate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateEnv {
  /// `GITHUB_EVENT_PATH`: release event payload
  pub event_path: Option<PathBuf>,
  /// `GITHUB_OUTPUT`: step output file
  pub output_path: Option<PathBuf>,
}

impl GateEnv {
  /// Read from the process environment (empty values count as unset)
  pub fn from_process() -> Self {
    let path_var = |name: &str| {
      std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
    };

    Self {
      event_path: path_var(EVENT_PATH_ENV),
      output_path: path_var(OUTPUT_PATH_ENV),
    }
  }
}

#[derive(Debug, Clone)]
pub struct GateContext {
  /// Working directory; relative manifest paths resolve against it
  pub root: PathBuf,

  /// Configuration (defaults when no file was found)
  pub config: GateConfig,

  pub env: GateEnv,
}

impl GateContext {
  /// Build the context for `root`, loading `config_path` if given, else searching `root`
  pub fn build(root: &Path, config_path: Option<&Path>, env: GateEnv) -> GateResult<Self> {
    let config = match config_path {
      Some(path) => GateConfig::load_file(&root.join(path))?,
      None => GateConfig::discover(root)?,
    };

    Ok(Self {
      root: root.to_path_buf(),
      config,
      env,
    })
  }

  /// Resolve a possibly-relative path against the working directory
  pub fn resolve(&self, path: &Path) -> PathBuf {
    if path.is_absolute() {
      path.to_path_buf()
    } else {
      self.root.join(path)
    }
  }
}
