//! Configuration errors: harness TOML config and fixture CONFIG sections.

use std::path::PathBuf;

use super::error_code::{self, FixtestErrorCode};

/// Errors from the structured-config service that parses CONFIG sections.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigTextError {
    #[error("config syntax error: {message}")]
    Syntax { message: String },

    #[error("config must be a mapping at the top level, but got {found}")]
    NotAMapping { found: String },
}

impl FixtestErrorCode for ConfigTextError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => error_code::CONFIG_TEXT_SYNTAX,
            Self::NotAMapping { .. } => error_code::CONFIG_TEXT_NOT_A_MAPPING,
        }
    }
}

/// Errors loading the harness's own `HarnessConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl FixtestErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } => error_code::CONFIG_ERROR,
            Self::TomlParse(_) => error_code::CONFIG_PARSE_ERROR,
        }
    }
}
