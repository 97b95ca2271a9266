//! Fixture-format parse errors.

use super::config_error::ConfigTextError;
use super::error_code::{self, FixtestErrorCode};

/// Errors raised while turning fixture text into a `Fixture`.
///
/// `fixture_line` is the 1-based line in the fixture text (after placeholder
/// substitution) where the offending header or entry sits.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown section header \"{header}\" (fixture line {fixture_line}).")]
    UnknownSection { header: String, fixture_line: usize },

    #[error("Could not extract {section} entry from fixture line {fixture_line}: {raw_line}")]
    MalformedLine {
        section: String,
        fixture_line: usize,
        raw_line: String,
    },

    #[error("Invalid line number in {section} entry on fixture line {fixture_line}: {raw_line}")]
    InvalidLineNumber {
        section: String,
        fixture_line: usize,
        raw_line: String,
    },

    #[error("Attributes for line {line} are not valid JSON (fixture line {fixture_line}): {message}")]
    InvalidAttributesJson {
        line: u32,
        fixture_line: usize,
        message: String,
    },

    #[error("Attributes for line {line} must be an object or array, but got {found} (fixture line {fixture_line}).")]
    AttributesNotStructured {
        line: u32,
        fixture_line: usize,
        found: String,
    },

    #[error("Attributes for line {line} were specified more than once (fixture line {fixture_line}).")]
    DuplicateAttributes { line: u32, fixture_line: usize },

    #[error("Invalid CONFIG section (fixture line {fixture_line}): {source}")]
    InvalidConfig {
        fixture_line: usize,
        #[source]
        source: ConfigTextError,
    },

    #[error("No filename was given.")]
    MissingFilename,
}

impl ParseError {
    /// Name of the section the error was raised in, when there is one.
    pub fn section(&self) -> Option<&str> {
        match self {
            Self::UnknownSection { header, .. } => Some(header),
            Self::MalformedLine { section, .. } | Self::InvalidLineNumber { section, .. } => {
                Some(section)
            }
            Self::InvalidAttributesJson { .. }
            | Self::AttributesNotStructured { .. }
            | Self::DuplicateAttributes { .. } => Some("LINE ATTRIBUTES"),
            Self::InvalidConfig { .. } => Some("CONFIG"),
            Self::MissingFilename => None,
        }
    }

    /// Line in the fixture text where the defect sits, when known.
    pub fn fixture_line(&self) -> Option<usize> {
        match self {
            Self::UnknownSection { fixture_line, .. }
            | Self::MalformedLine { fixture_line, .. }
            | Self::InvalidLineNumber { fixture_line, .. }
            | Self::InvalidAttributesJson { fixture_line, .. }
            | Self::AttributesNotStructured { fixture_line, .. }
            | Self::DuplicateAttributes { fixture_line, .. }
            | Self::InvalidConfig { fixture_line, .. } => Some(*fixture_line),
            Self::MissingFilename => None,
        }
    }
}

impl FixtestErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSection { .. } => error_code::PARSE_UNKNOWN_SECTION,
            Self::MalformedLine { .. } => error_code::PARSE_MALFORMED_LINE,
            Self::InvalidLineNumber { .. } => error_code::PARSE_INVALID_LINE_NUMBER,
            Self::InvalidAttributesJson { .. } => error_code::PARSE_INVALID_ATTRIBUTES_JSON,
            Self::AttributesNotStructured { .. } => error_code::PARSE_ATTRIBUTES_NOT_STRUCTURED,
            Self::DuplicateAttributes { .. } => error_code::PARSE_DUPLICATE_ATTRIBUTES,
            Self::InvalidConfig { .. } => error_code::PARSE_INVALID_CONFIG,
            Self::MissingFilename => error_code::PARSE_MISSING_FILENAME,
        }
    }
}
