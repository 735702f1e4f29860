//! Validate command implementation
//!
//! Loads the release event and manifest, runs the gate, and hands the outcome to
//! the selected output sink. The outcome goes back to main, which turns a rejection
//! into the validation exit code.

use crate::core::context::GateContext;
use crate::core::error::GateResult;
use crate::outputs::{self, GithubSink, JsonSink, OutputSink, TextSink};
use crate::release::{EventSource, Manifest, ReleaseEvent, ReleaseValidator, ValidationOutcome};
use std::path::PathBuf;

/// Where the release event and manifest come from
#[derive(Debug, Clone, Default)]
pub struct InputArgs {
  /// Event payload file (defaults to GITHUB_EVENT_PATH)
  pub event: Option<PathBuf>,
  /// Manifest file (defaults to config, then package.json)
  pub manifest: Option<PathBuf>,
  /// Inline tag; bypasses the payload file
  pub tag: Option<String>,
  pub draft: bool,
  pub prerelease: bool,
}

/// Inputs loaded at the boundary, ready for validation
#[derive(Debug, Clone)]
pub struct LoadedInputs {
  pub event: ReleaseEvent,
  pub manifest: Manifest,
}

/// Load the release event and manifest described by `args`
pub fn load_inputs(ctx: &GateContext, args: &InputArgs) -> GateResult<LoadedInputs> {
  let source = EventSource::resolve(
    args.tag.clone(),
    args.draft,
    args.prerelease,
    args.event.as_deref().map(|p| ctx.resolve(p)),
    ctx.env.event_path.clone(),
  )?;
  let event = source.load()?;

  let manifest_path = ctx.resolve(&ctx.config.manifest_path(args.manifest.as_deref()));
  let manifest = Manifest::load(&manifest_path)?;

  Ok(LoadedInputs { event, manifest })
}

/// Load inputs and run the gate, without emitting anything
pub fn evaluate(ctx: &GateContext, args: &InputArgs) -> GateResult<ValidationOutcome> {
  let inputs = load_inputs(ctx, args)?;
  let outcome = ReleaseValidator::validate(&inputs.event, inputs.manifest.version());

  match &outcome {
    ValidationOutcome::Success(out) => {
      tracing::info!(version = %out.version, tag = %out.tag, "release accepted");
    }
    ValidationOutcome::Failure(rejection) => {
      tracing::info!(kind = rejection.kind(), raw_tag = %inputs.event.raw_tag, "release rejected");
    }
  }

  Ok(outcome)
}

/// Pick the sink: --json, then GitHub output file (flag or GITHUB_OUTPUT), then text
fn select_sink(ctx: &GateContext, github_output: Option<PathBuf>, json: bool) -> Box<dyn OutputSink> {
  if json {
    return Box::new(JsonSink::stdout());
  }

  match github_output
    .map(|p| ctx.resolve(&p))
    .or_else(|| ctx.env.output_path.clone())
  {
    Some(path) => Box::new(GithubSink::new(path, ctx.config.outputs.clone())),
    None => Box::new(TextSink::stdio()),
  }
}

/// Run the validate command and return the emitted outcome
///
/// The caller maps a rejection to `ExitCode::Validation`.
pub fn run_validate(
  ctx: &GateContext,
  args: InputArgs,
  github_output: Option<PathBuf>,
  json: bool,
) -> GateResult<ValidationOutcome> {
  let outcome = evaluate(ctx, &args)?;

  let mut sink = select_sink(ctx, github_output, json);
  outputs::emit(sink.as_mut(), &outcome)?;

  Ok(outcome)
}
