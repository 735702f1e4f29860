//! Release event loading
//!
//! Reads the `release` object out of a GitHub Actions event payload, or builds the
//! event straight from command-line values.

use super::validator::ReleaseEvent;
use crate::core::error::{GateError, GateResult, InputError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable GitHub Actions uses to expose the event payload
pub const EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";

#[derive(Debug, Deserialize)]
struct EventPayload {
  #[serde(default)]
  release: Option<ReleasePayload>,
}

#[derive(Debug, Deserialize)]
struct ReleasePayload {
  #[serde(default)]
  draft: bool,
  #[serde(default)]
  prerelease: bool,
  tag_name: String,
}

impl From<ReleasePayload> for ReleaseEvent {
  fn from(payload: ReleasePayload) -> Self {
    ReleaseEvent::new(payload.tag_name, payload.draft, payload.prerelease)
  }
}

/// Where the release event comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
  /// Fields given directly on the command line
  Inline { tag: String, draft: bool, prerelease: bool },
  /// JSON payload file
  Payload(PathBuf),
}

impl EventSource {
  /// Pick the event source: inline tag, then explicit payload, then `GITHUB_EVENT_PATH`
  pub fn resolve(
    tag: Option<String>,
    draft: bool,
    prerelease: bool,
    event_path: Option<PathBuf>,
    env_event_path: Option<PathBuf>,
  ) -> GateResult<Self> {
    if let Some(tag) = tag {
      return Ok(EventSource::Inline { tag, draft, prerelease });
    }

    event_path
      .or(env_event_path)
      .map(EventSource::Payload)
      .ok_or(GateError::Input(InputError::NoEvent))
  }

  /// Load the event this source describes
  pub fn load(&self) -> GateResult<ReleaseEvent> {
    match self {
      EventSource::Inline { tag, draft, prerelease } => Ok(ReleaseEvent::new(tag.clone(), *draft, *prerelease)),
      EventSource::Payload(path) => load_payload(path),
    }
  }
}

/// Read a release event from a payload file
pub fn load_payload(path: &Path) -> GateResult<ReleaseEvent> {
  tracing::debug!(path = %path.display(), "reading event payload");

  let content = std::fs::read_to_string(path).map_err(|e| {
    GateError::Input(InputError::UnreadablePayload {
      path: path.to_path_buf(),
      reason: e.to_string(),
    })
  })?;

  parse_payload(&content, path)
}

/// Parse a release event from payload JSON; `path` is only used for error reporting
pub fn parse_payload(content: &str, path: &Path) -> GateResult<ReleaseEvent> {
  let payload: EventPayload = serde_json::from_str(content).map_err(|e| {
    GateError::Input(InputError::MalformedPayload {
      path: path.to_path_buf(),
      reason: e.to_string(),
    })
  })?;

  let release = payload.release.ok_or_else(|| {
    GateError::Input(InputError::NotAReleaseEvent {
      path: path.to_path_buf(),
    })
  })?;

  Ok(release.into())
}
