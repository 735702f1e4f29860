//! Release gate validation
//!
//! A linear guard chain over one release event and one manifest version. The first
//! failing guard decides the outcome; nothing after it is evaluated.
//!
//! Order of guards:
//! 1. draft releases are skipped
//! 2. the manifest must declare a version
//! 3. the tag must start with `v`
//! 4. the tag (minus `v`) must equal the manifest version, byte for byte
//! 5. that version must be valid semver
//! 6. the pre-release flag must agree with the version's pre-release identifiers

use semver::Version;
use serde::Serialize;
use std::fmt;

/// Release metadata taken from the source-control event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseEvent {
  pub is_draft: bool,
  pub is_prerelease: bool,
  /// Tag exactly as pushed, e.g. `v1.2.3-beta.1`
  pub raw_tag: String,
}

impl ReleaseEvent {
  pub fn new(raw_tag: impl Into<String>, is_draft: bool, is_prerelease: bool) -> Self {
    Self {
      is_draft,
      is_prerelease,
      raw_tag: raw_tag.into(),
    }
  }
}

/// Why a release was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
  Draft,
  MissingManifestVersion,
  MissingTagPrefix,
  VersionMismatch { tag: String, manifest: String },
  InvalidSemver,
  PrereleaseWithoutIdentifier,
  UnflaggedPrerelease,
}

impl Rejection {
  /// Stable kebab-case identifier (used in JSON output)
  pub fn kind(&self) -> &'static str {
    match self {
      Rejection::Draft => "draft",
      Rejection::MissingManifestVersion => "missing-version",
      Rejection::MissingTagPrefix => "malformed-tag",
      Rejection::VersionMismatch { .. } => "version-mismatch",
      Rejection::InvalidSemver => "invalid-semver",
      Rejection::PrereleaseWithoutIdentifier | Rejection::UnflaggedPrerelease => "prerelease-mismatch",
    }
  }

  /// Human-readable reason, as reported to the CI platform
  pub fn reason(&self) -> String {
    self.to_string()
  }
}

impl fmt::Display for Rejection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Rejection::Draft => write!(f, "release is a draft; skip publish."),
      Rejection::MissingManifestVersion => write!(f, "manifest is missing a version."),
      Rejection::MissingTagPrefix => {
        write!(f, "release tag does not start with `v` (expected form `v1.2.3`).")
      }
      Rejection::VersionMismatch { tag, manifest } => {
        write!(f, "tag does not match manifest version: tag={}, manifest={}.", tag, manifest)
      }
      Rejection::InvalidSemver => write!(f, "tag/manifest version is not valid semver."),
      Rejection::PrereleaseWithoutIdentifier => write!(
        f,
        "marked as pre-release but version has no pre-release identifier (expected form `1.2.3-beta.1`)."
      ),
      Rejection::UnflaggedPrerelease => {
        write!(f, "not marked as pre-release but version has a pre-release identifier.")
      }
    }
  }
}

/// Values handed to downstream publishing steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseOutputs {
  /// Tag without its leading `v`; equal to the manifest version
  pub version: String,
  /// First pre-release identifier (`beta` for `1.2.3-beta.1`), empty for stable releases
  pub tag: String,
}

/// Result of gating one release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
  Failure(Rejection),
  Success(ReleaseOutputs),
}

impl ValidationOutcome {
  pub fn is_success(&self) -> bool {
    matches!(self, ValidationOutcome::Success(_))
  }
}

impl From<Result<ReleaseOutputs, Rejection>> for ValidationOutcome {
  fn from(result: Result<ReleaseOutputs, Rejection>) -> Self {
    match result {
      Ok(outputs) => ValidationOutcome::Success(outputs),
      Err(rejection) => ValidationOutcome::Failure(rejection),
    }
  }
}

/// Gate for publishing a release
///
/// Stateless: the same event and manifest version always produce the same outcome.
pub struct ReleaseValidator;

impl ReleaseValidator {
  /// Validate a release event against the manifest's declared version
  pub fn validate(event: &ReleaseEvent, manifest_version: Option<&str>) -> ValidationOutcome {
    Self::check(event, manifest_version).into()
  }

  fn check(event: &ReleaseEvent, manifest_version: Option<&str>) -> Result<ReleaseOutputs, Rejection> {
    if event.is_draft {
      return Err(Rejection::Draft);
    }

    let manifest_version = manifest_version
      .filter(|v| !v.is_empty())
      .ok_or(Rejection::MissingManifestVersion)?;

    let tag_version = event.raw_tag.strip_prefix('v').ok_or(Rejection::MissingTagPrefix)?;

    // Exact comparison: `1.2.3` and `1.2.3+build` are different releases here
    if tag_version != manifest_version {
      return Err(Rejection::VersionMismatch {
        tag: tag_version.to_string(),
        manifest: manifest_version.to_string(),
      });
    }

    let version = Version::parse(tag_version).map_err(|_| Rejection::InvalidSemver)?;

    let first_identifier = if version.pre.is_empty() {
      None
    } else {
      version.pre.as_str().split('.').next()
    };

    let tag = match (event.is_prerelease, first_identifier) {
      (true, None) => return Err(Rejection::PrereleaseWithoutIdentifier),
      (false, Some(_)) => return Err(Rejection::UnflaggedPrerelease),
      (true, Some(identifier)) => identifier.to_string(),
      (false, None) => String::new(),
    };

    Ok(ReleaseOutputs {
      version: tag_version.to_string(),
      tag,
    })
  }
}
