//! # fixtest-core
//!
//! Foundation crate for the fixtest fixture harness.
//! Defines errors, error codes, harness configuration, tracing setup, and constants.
//! The harness crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::HarnessConfig;
pub use errors::error_code::FixtestErrorCode;
pub use errors::{
    ConfigError, ConfigTextError, EngineError, HarnessError, HarnessResult, ParseError,
};
