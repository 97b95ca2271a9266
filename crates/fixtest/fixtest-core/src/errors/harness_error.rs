//! Top-level harness error.
//! Everything that can stop a single fixture from reaching comparison.

use std::path::PathBuf;

use super::error_code::{self, FixtestErrorCode};
use super::{ConfigError, EngineError, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Could not parse fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Could not read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not stage {path}: {source}")]
    Stage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to stage path outside the staging directory: {path}")]
    UnsafePath { path: String },

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Engine produced no result for {filename}")]
    FileNotAnalyzed { filename: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not discover fixtures under {root}: {message}")]
    Discovery { root: PathBuf, message: String },
}

impl FixtestErrorCode for HarnessError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { source, .. } => source.error_code(),
            Self::Read { .. } | Self::Stage { .. } => error_code::IO_ERROR,
            Self::UnsafePath { .. } => error_code::UNSAFE_PATH,
            Self::Engine(e) => e.error_code(),
            Self::FileNotAnalyzed { .. } => error_code::FILE_NOT_ANALYZED,
            Self::Config(e) => e.error_code(),
            Self::Discovery { .. } => error_code::DISCOVERY_ERROR,
        }
    }
}

pub type HarnessResult<T> = Result<T, HarnessError>;
