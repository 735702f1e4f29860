//! Core building blocks shared by all release-gate commands
//!
//! - **config**: release-gate.toml parsing and validation
//! - **context**: Invocation context (working directory, config, environment)
//! - **error**: Error types with contextual help messages and exit codes
//! - **logging**: tracing subscriber setup

pub mod config;
pub mod context;
pub mod error;
pub mod logging;
