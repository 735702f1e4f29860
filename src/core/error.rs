//! Error types for release-gate with contextual messages and exit codes
//!
//! A rejected release is not an error: the validator returns it as a value.
//! `GateError` covers everything around it, i.e. unreadable manifests, malformed event
//! payloads and bad configuration. Each error maps to an exit code that is distinct
//! from the one used for a rejected release.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for release-gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing or malformed input files)
  User = 1,
  /// System error (I/O while writing outputs)
  System = 2,
  /// The release was rejected by the validator
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for release-gate
#[derive(Debug)]
pub enum GateError {
  /// Configuration errors
  Config(ConfigError),

  /// Event payload or manifest could not be loaded
  Input(InputError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl GateError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    GateError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    GateError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      GateError::Message { message, context, help } => GateError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      GateError::Config(_) => ExitCode::User,
      GateError::Input(_) => ExitCode::User,
      GateError::Io(_) => ExitCode::System,
      GateError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      GateError::Config(e) => e.help_message(),
      GateError::Input(e) => e.help_message(),
      GateError::Message { help, .. } => help.clone(),
      GateError::Io(_) => None,
    }
  }
}

impl fmt::Display for GateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GateError::Config(e) => write!(f, "{}", e),
      GateError::Input(e) => write!(f, "{}", e),
      GateError::Io(e) => write!(f, "I/O error: {}", e),
      GateError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for GateError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      GateError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for GateError {
  fn from(err: io::Error) -> Self {
    GateError::Io(err)
  }
}

impl From<toml_edit::de::Error> for GateError {
  fn from(err: toml_edit::de::Error) -> Self {
    GateError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<serde_json::Error> for GateError {
  fn from(err: serde_json::Error) -> Self {
    GateError::message(format!("JSON error: {}", err))
  }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
  /// An explicitly requested config file does not exist
  NotFound { path: PathBuf },

  /// A config value failed validation
  InvalidValue { field: String, reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => Some(
        "Drop the --config flag to use release-gate.toml from the working directory, or create the file.".to_string(),
      ),
      ConfigError::InvalidValue { field, .. } => Some(format!("Fix `{}` in release-gate.toml.", field)),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { path } => {
        write!(f, "Config file not found: {}", path.display())
      }
      ConfigError::InvalidValue { field, reason } => {
        write!(f, "Invalid config value for `{}`: {}", field, reason)
      }
    }
  }
}

/// Errors while loading the release event or the manifest
#[derive(Debug)]
pub enum InputError {
  /// Neither --event, --tag nor GITHUB_EVENT_PATH supplied an event
  NoEvent,

  /// The event payload carries no `release` object
  NotAReleaseEvent { path: PathBuf },

  /// The event payload file could not be read
  UnreadablePayload { path: PathBuf, reason: String },

  /// The event payload could not be parsed
  MalformedPayload { path: PathBuf, reason: String },

  /// The manifest file could not be read or parsed
  UnreadableManifest { path: PathBuf, reason: String },
}

impl InputError {
  fn help_message(&self) -> Option<String> {
    match self {
      InputError::NoEvent => Some(
        "Run inside a GitHub Actions `release` workflow, pass --event <payload.json>, or pass --tag <tag>.".to_string(),
      ),
      InputError::NotAReleaseEvent { .. } => {
        Some("Trigger the workflow with `on: release` so the payload carries a release object.".to_string())
      }
      InputError::UnreadableManifest { .. } => {
        Some("Point --manifest (or [manifest].path in release-gate.toml) at the project manifest.".to_string())
      }
      InputError::UnreadablePayload { .. } | InputError::MalformedPayload { .. } => None,
    }
  }
}

impl fmt::Display for InputError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      InputError::NoEvent => write!(f, "No release event available"),
      InputError::NotAReleaseEvent { path } => {
        write!(f, "Event payload has no `release` object: {}", path.display())
      }
      InputError::UnreadablePayload { path, reason } => {
        write!(f, "Failed to read event payload {}: {}", path.display(), reason)
      }
      InputError::MalformedPayload { path, reason } => {
        write!(f, "Failed to parse event payload {}: {}", path.display(), reason)
      }
      InputError::UnreadableManifest { path, reason } => {
        write!(f, "Failed to load manifest {}: {}", path.display(), reason)
      }
    }
  }
}

/// Result type alias for release-gate
pub type GateResult<T> = Result<T, GateError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> GateResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<GateError>,
{
  fn with_context<F>(self, f: F) -> GateResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &GateError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
