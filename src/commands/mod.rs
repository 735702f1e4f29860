//! CLI commands for release-gate
//!
//! - **validate**: Gate a release event against the manifest version and emit outputs
//! - **inspect**: Show the resolved release event and manifest without validating
//!
//! Both commands accept `&GateContext` so config and environment are read once in main.

pub mod inspect;
pub mod validate;

pub use inspect::run_inspect;
pub use validate::{InputArgs, run_validate};
