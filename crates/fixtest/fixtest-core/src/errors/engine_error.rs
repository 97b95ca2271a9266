//! Errors reported by an analysis engine implementation.

use super::error_code::{self, FixtestErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("analysis failed: {message}")]
    Failed { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

impl FixtestErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Failed { .. } => error_code::ENGINE_ERROR,
            Self::Io(_) => error_code::IO_ERROR,
        }
    }
}
