//! Defaults shared across the harness.

/// File extension of fixture files, without the leading dot.
pub const DEFAULT_FIXTURE_EXTENSION: &str = "test";

/// Placeholder replaced with the suite's base directory before parsing.
pub const DEFAULT_DIR_PLACEHOLDER: &str = "%dir%";

/// Name of the analyzer configuration file written into each staging directory.
pub const DEFAULT_ANALYZER_CONFIG_FILENAME: &str = ".scrutinizer.yml";

/// Prefix for staging directory names.
pub const DEFAULT_STAGING_PREFIX: &str = "scrtnzer";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "FIXTEST_LOG";

/// Filter used when `FIXTEST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "fixtest=info";
