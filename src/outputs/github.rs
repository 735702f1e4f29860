//! GitHub Actions sink
//!
//! Success appends `name=value` lines to the file named by `GITHUB_OUTPUT`.
//! Failure prints an `::error::` workflow command; the process exit code does the rest.

use super::OutputSink;
use crate::core::config::OutputsConfig;
use crate::core::error::{GateError, GateResult};
use crate::release::{Rejection, ReleaseOutputs};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable naming the step output file
pub const OUTPUT_PATH_ENV: &str = "GITHUB_OUTPUT";

pub struct GithubSink<W: Write> {
  output_file: PathBuf,
  names: OutputsConfig,
  commands: W,
}

impl GithubSink<std::io::Stdout> {
  pub fn new(output_file: PathBuf, names: OutputsConfig) -> Self {
    Self::with_writer(output_file, names, std::io::stdout())
  }
}

impl<W: Write> GithubSink<W> {
  /// Build a sink that writes workflow commands to `commands`
  pub fn with_writer(output_file: PathBuf, names: OutputsConfig, commands: W) -> Self {
    Self {
      output_file,
      names,
      commands,
    }
  }

  pub fn output_file(&self) -> &Path {
    &self.output_file
  }

  #[cfg(test)]
  fn into_commands(self) -> W {
    self.commands
  }
}

/// Escape a workflow command message (`%`, CR and LF)
pub fn escape_data(value: &str) -> String {
  value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

impl<W: Write> OutputSink for GithubSink<W> {
  fn success(&mut self, outputs: &ReleaseOutputs) -> GateResult<()> {
    tracing::debug!(path = %self.output_file().display(), "writing step outputs");

    let mut file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(&self.output_file)
      .map_err(|e| {
        GateError::with_help(
          format!("Failed to open {}: {}", self.output_file.display(), e),
          format!("Check that {} points at a writable file.", OUTPUT_PATH_ENV),
        )
      })?;

    writeln!(file, "{}={}", self.names.version, outputs.version)?;
    writeln!(file, "{}={}", self.names.tag, outputs.tag)?;

    Ok(())
  }

  fn failure(&mut self, rejection: &Rejection) -> GateResult<()> {
    writeln!(self.commands, "::error::{}", escape_data(&rejection.reason()))?;
    Ok(())
  }
}
