mod commands;
mod core;
mod outputs;
mod release;

use anstyle::AnsiColor;
use clap::builder::Styles;
use clap::{Args, Parser, Subcommand};
use crate::core::context::{GateContext, GateEnv};
use crate::core::error::{ExitCode, GateError, print_error};
use std::path::PathBuf;

/// Gate publishing on a release whose tag agrees with the manifest version
#[derive(Parser)]
#[command(name = "release-gate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = STYLES)]
struct Cli {
  /// Config file (default: release-gate.toml in the working directory, if present)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Log diagnostics at debug level (otherwise controlled by RELEASE_GATE_LOG)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Validate a release event against the manifest and emit `version`/`tag` outputs
  Validate {
    #[command(flatten)]
    inputs: InputOpts,
    /// Write outputs to this file in GitHub Actions format (default: $GITHUB_OUTPUT)
    #[arg(long)]
    github_output: Option<PathBuf>,
    /// Output the outcome in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Show the release event and manifest version that would be validated
  Inspect {
    #[command(flatten)]
    inputs: InputOpts,
    /// Output in JSON format
    #[arg(long)]
    json: bool,
  },
}

#[derive(Args)]
struct InputOpts {
  /// Release event payload (default: $GITHUB_EVENT_PATH)
  #[arg(long, conflicts_with = "tag")]
  event: Option<PathBuf>,
  /// Project manifest (default: [manifest].path from config, then package.json)
  #[arg(long)]
  manifest: Option<PathBuf>,
  /// Release tag, e.g. v1.2.3; bypasses the event payload
  #[arg(long)]
  tag: Option<String>,
  /// Treat the release as a draft (with --tag)
  #[arg(long, requires = "tag")]
  draft: bool,
  /// Treat the release as a pre-release (with --tag)
  #[arg(long, requires = "tag")]
  prerelease: bool,
}

impl From<InputOpts> for commands::InputArgs {
  fn from(opts: InputOpts) -> Self {
    commands::InputArgs {
      event: opts.event,
      manifest: opts.manifest,
      tag: opts.tag,
      draft: opts.draft,
      prerelease: opts.prerelease,
    }
  }
}

const STYLES: Styles = Styles::styled()
  .header(AnsiColor::Cyan.on_default().bold().underline())
  .usage(AnsiColor::Cyan.on_default().bold().underline())
  .literal(AnsiColor::Green.on_default().bold())
  .placeholder(AnsiColor::Cyan.on_default())
  .valid(AnsiColor::Green.on_default())
  .invalid(AnsiColor::Yellow.on_default().bold())
  .error(AnsiColor::Red.on_default().bold());

fn main() {
  let cli = Cli::parse();
  crate::core::logging::init(cli.verbose);

  let root = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("Error: Failed to get current directory: {}", e);
      std::process::exit(1);
    }
  };

  let ctx = match GateContext::build(&root, cli.config.as_deref(), GateEnv::from_process()) {
    Ok(ctx) => ctx,
    Err(e) => handle_error(e),
  };

  let result = match cli.command {
    Commands::Validate {
      inputs,
      github_output,
      json,
    } => commands::run_validate(&ctx, inputs.into(), github_output, json).map(|outcome| outcome.is_success()),
    Commands::Inspect { inputs, json } => commands::run_inspect(&ctx, inputs.into(), json).map(|()| true),
  };

  match result {
    Ok(true) => {}
    Ok(false) => std::process::exit(ExitCode::Validation.as_i32()),
    Err(err) => handle_error(err),
  }
}

fn handle_error(err: GateError) -> ! {
  tracing::debug!(error = ?err, "command failed");
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
