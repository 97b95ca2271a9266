//! Stable error codes.

pub const PARSE_UNKNOWN_SECTION: &str = "PARSE_UNKNOWN_SECTION";
pub const PARSE_MALFORMED_LINE: &str = "PARSE_MALFORMED_LINE";
pub const PARSE_INVALID_LINE_NUMBER: &str = "PARSE_INVALID_LINE_NUMBER";
pub const PARSE_INVALID_ATTRIBUTES_JSON: &str = "PARSE_INVALID_ATTRIBUTES_JSON";
pub const PARSE_ATTRIBUTES_NOT_STRUCTURED: &str = "PARSE_ATTRIBUTES_NOT_STRUCTURED";
pub const PARSE_DUPLICATE_ATTRIBUTES: &str = "PARSE_DUPLICATE_ATTRIBUTES";
pub const PARSE_INVALID_CONFIG: &str = "PARSE_INVALID_CONFIG";
pub const PARSE_MISSING_FILENAME: &str = "PARSE_MISSING_FILENAME";
pub const CONFIG_TEXT_SYNTAX: &str = "CONFIG_TEXT_SYNTAX";
pub const CONFIG_TEXT_NOT_A_MAPPING: &str = "CONFIG_TEXT_NOT_A_MAPPING";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const ENGINE_ERROR: &str = "ENGINE_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const UNSAFE_PATH: &str = "UNSAFE_PATH";
pub const FILE_NOT_ANALYZED: &str = "FILE_NOT_ANALYZED";
pub const DISCOVERY_ERROR: &str = "DISCOVERY_ERROR";

/// Maps an error to a stable string code, independent of its display text.
pub trait FixtestErrorCode {
    fn error_code(&self) -> &'static str;
}
