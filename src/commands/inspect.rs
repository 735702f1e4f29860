//! Inspect command implementation
//!
//! Shows the inputs the gate would see, without validating them.

use super::validate::{InputArgs, load_inputs};
use crate::core::context::GateContext;
use crate::core::error::GateResult;
use crate::release::ReleaseEvent;
use crate::release::manifest::ManifestKind;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct InspectReport {
  event: ReleaseEvent,
  manifest_path: PathBuf,
  manifest_kind: &'static str,
  manifest_version: Option<String>,
}

fn kind_name(kind: ManifestKind) -> &'static str {
  match kind {
    ManifestKind::Json => "json",
    ManifestKind::Toml => "toml",
  }
}

/// Run the inspect command
pub fn run_inspect(ctx: &GateContext, args: InputArgs, json: bool) -> GateResult<()> {
  let inputs = load_inputs(ctx, &args)?;

  let report = InspectReport {
    event: inputs.event,
    manifest_path: inputs.manifest.path.clone(),
    manifest_kind: kind_name(inputs.manifest.kind),
    manifest_version: inputs.manifest.version,
  };

  if json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    print_report(&report);
  }

  Ok(())
}

fn print_report(report: &InspectReport) {
  println!("🔍 Release inputs");
  println!();
  println!("  Event:");
  println!("    tag:        {}", report.event.raw_tag);
  println!("    draft:      {}", report.event.is_draft);
  println!("    prerelease: {}", report.event.is_prerelease);
  println!();
  println!("  Manifest:");
  println!("    path:       {}", report.manifest_path.display());
  println!("    format:     {}", report.manifest_kind);
  match &report.manifest_version {
    Some(version) => println!("    version:    {}", version),
    None => println!("    version:    ⚠️  (missing)"),
  }
}
