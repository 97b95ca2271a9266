//! Error types for every harness subsystem.
//! Each enum implements [`error_code::FixtestErrorCode`] for stable, matchable codes.

pub mod error_code;

mod config_error;
mod engine_error;
mod harness_error;
mod parse_error;

pub use config_error::{ConfigError, ConfigTextError};
pub use engine_error::EngineError;
pub use harness_error::{HarnessError, HarnessResult};
pub use parse_error::ParseError;
