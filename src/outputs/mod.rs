//! Output sinks for validation outcomes
//!
//! A sink turns one `ValidationOutcome` into whatever the caller consumes:
//!
//! - **github**: `name=value` lines in the `GITHUB_OUTPUT` file, `::error::` annotations
//! - **text**: human-readable lines for local runs
//! - **json**: one JSON object for scripting
//!
//! Exactly one of `success` / `failure` is called per invocation.

pub mod github;

use crate::core::error::GateResult;
use crate::release::{Rejection, ReleaseOutputs, ValidationOutcome};
use serde::Serialize;
use std::io::Write;

pub use github::GithubSink;

/// Destination for the outcome of a validation run
pub trait OutputSink {
  /// Emit the named outputs of an accepted release
  fn success(&mut self, outputs: &ReleaseOutputs) -> GateResult<()>;

  /// Emit the failure signal of a rejected release
  fn failure(&mut self, rejection: &Rejection) -> GateResult<()>;
}

/// Route an outcome to the matching sink method
pub fn emit(sink: &mut dyn OutputSink, outcome: &ValidationOutcome) -> GateResult<()> {
  match outcome {
    ValidationOutcome::Success(outputs) => sink.success(outputs),
    ValidationOutcome::Failure(rejection) => sink.failure(rejection),
  }
}

/// Human-readable output: success on `out`, failure on `err`
pub struct TextSink<O: Write, E: Write> {
  out: O,
  err: E,
}

impl TextSink<std::io::Stdout, std::io::Stderr> {
  pub fn stdio() -> Self {
    Self::new(std::io::stdout(), std::io::stderr())
  }
}

impl<O: Write, E: Write> TextSink<O, E> {
  pub fn new(out: O, err: E) -> Self {
    Self { out, err }
  }

  #[cfg(test)]
  fn into_inner(self) -> (O, E) {
    (self.out, self.err)
  }
}

impl<O: Write, E: Write> OutputSink for TextSink<O, E> {
  fn success(&mut self, outputs: &ReleaseOutputs) -> GateResult<()> {
    writeln!(self.out, "✅ Release is ready to publish")?;
    writeln!(self.out, "   version: {}", outputs.version)?;
    if outputs.tag.is_empty() {
      writeln!(self.out, "   tag:     (none, stable release)")?;
    } else {
      writeln!(self.out, "   tag:     {}", outputs.tag)?;
    }
    Ok(())
  }

  fn failure(&mut self, rejection: &Rejection) -> GateResult<()> {
    writeln!(self.err, "❌ Release rejected: {}", rejection)?;
    Ok(())
  }
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum JsonOutcome<'a> {
  Success { version: &'a str, tag: &'a str },
  Failure { kind: &'a str, reason: String },
}

/// JSON output: one object per invocation
pub struct JsonSink<W: Write> {
  out: W,
}

impl JsonSink<std::io::Stdout> {
  pub fn stdout() -> Self {
    Self::new(std::io::stdout())
  }
}

impl<W: Write> JsonSink<W> {
  pub fn new(out: W) -> Self {
    Self { out }
  }

  fn write(&mut self, outcome: &JsonOutcome<'_>) -> GateResult<()> {
    writeln!(self.out, "{}", serde_json::to_string_pretty(outcome)?)?;
    Ok(())
  }

  #[cfg(test)]
  fn into_inner(self) -> W {
    self.out
  }
}

impl<W: Write> OutputSink for JsonSink<W> {
  fn success(&mut self, outputs: &ReleaseOutputs) -> GateResult<()> {
    self.write(&JsonOutcome::Success {
      version: &outputs.version,
      tag: &outputs.tag,
    })
  }

  fn failure(&mut self, rejection: &Rejection) -> GateResult<()> {
    self.write(&JsonOutcome::Failure {
      kind: rejection.kind(),
      reason: rejection.reason(),
    })
  }
}
