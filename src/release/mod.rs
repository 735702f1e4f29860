//! Release gating
//!
//! Decides whether a source-control release may be published.
//!
//! # Architecture
//!
//! - **validator**: the pure guard chain (`ReleaseValidator::validate`)
//! - **event**: loads the release event (payload file or inline flags)
//! - **manifest**: loads the manifest's declared version (package.json or Cargo.toml)
//!
//! Loading happens before validation and is the only part that can raise a `GateError`.
//! A rejected release is a `ValidationOutcome::Failure`, not an error.
//!
//! # Example
//!
//! ```rust,ignore
//! use release_gate::release::{ReleaseEvent, ReleaseValidator, ValidationOutcome};
//!
//! let event = ReleaseEvent::new("v1.2.3-beta.1", false, true);
//! match ReleaseValidator::validate(&event, Some("1.2.3-beta.1")) {
//!   ValidationOutcome::Success(out) => assert_eq!(out.tag, "beta"),
//!   ValidationOutcome::Failure(rejection) => panic!("{}", rejection),
//! }
//! ```

pub mod event;
pub mod manifest;
pub mod validator;

pub use event::EventSource;
pub use manifest::Manifest;
pub use validator::{ReleaseEvent, ReleaseOutputs, ReleaseValidator, Rejection, ValidationOutcome};
