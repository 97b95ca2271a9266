//! Harness configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Configuration for discovering, staging, and running fixtures.
///
/// Every field is optional; the `effective_*` accessors supply the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct HarnessConfig {
    /// Fixture file extension, without the dot. Default: "test".
    pub fixture_extension: Option<String>,
    /// Token replaced with the suite's base directory. Default: "%dir%".
    pub dir_placeholder: Option<String>,
    /// Analyzer config file written into the staging root. Default: ".scrutinizer.yml".
    pub analyzer_config_filename: Option<String>,
    /// Prefix for staging directory names. Default: "scrtnzer".
    pub staging_prefix: Option<String>,
    /// Keep the staging directory of failed fixtures for inspection. Default: false.
    pub keep_failed_staging: Option<bool>,
    /// Additional literal substitutions applied after the directory placeholder.
    pub extra_substitutions: BTreeMap<String, String>,
}

impl HarnessConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load config from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading harness config");
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn effective_fixture_extension(&self) -> &str {
        self.fixture_extension
            .as_deref()
            .unwrap_or(constants::DEFAULT_FIXTURE_EXTENSION)
    }

    pub fn effective_dir_placeholder(&self) -> &str {
        self.dir_placeholder
            .as_deref()
            .unwrap_or(constants::DEFAULT_DIR_PLACEHOLDER)
    }

    pub fn effective_analyzer_config_filename(&self) -> &str {
        self.analyzer_config_filename
            .as_deref()
            .unwrap_or(constants::DEFAULT_ANALYZER_CONFIG_FILENAME)
    }

    pub fn effective_staging_prefix(&self) -> &str {
        self.staging_prefix
            .as_deref()
            .unwrap_or(constants::DEFAULT_STAGING_PREFIX)
    }

    pub fn effective_keep_failed_staging(&self) -> bool {
        self.keep_failed_staging.unwrap_or(false)
    }

    /// Substitutions applied to raw fixture text, in order: the directory
    /// placeholder first, then `extra_substitutions` sorted by token.
    ///
    /// The placeholder always expands to an absolute path; a relative
    /// `base_dir` is resolved against the current directory.
    pub fn substitutions(&self, base_dir: &Path) -> Vec<(String, String)> {
        let base_dir = std::path::absolute(base_dir).unwrap_or_else(|err| {
            tracing::warn!(path = %base_dir.display(), error = %err, "could not make base directory absolute");
            base_dir.to_path_buf()
        });
        let mut subs = Vec::with_capacity(1 + self.extra_substitutions.len());
        subs.push((
            self.effective_dir_placeholder().to_string(),
            base_dir.display().to_string(),
        ));
        subs.extend(
            self.extra_substitutions
                .iter()
                .map(|(token, value)| (token.clone(), value.clone())),
        );
        subs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = HarnessConfig::from_toml("").unwrap();
        assert_eq!(config.effective_fixture_extension(), "test");
        assert_eq!(config.effective_dir_placeholder(), "%dir%");
        assert_eq!(config.effective_analyzer_config_filename(), ".scrutinizer.yml");
        assert_eq!(config.effective_staging_prefix(), "scrtnzer");
        assert!(!config.effective_keep_failed_staging());
    }

    #[test]
    fn test_overrides_and_substitution_order() {
        let config = HarnessConfig::from_toml(
            r#"
            fixture_extension = "fixture"
            keep_failed_staging = true

            [extra_substitutions]
            "%vendor%" = "/opt/vendor"
            "%bin%" = "/usr/bin"
            "#,
        )
        .unwrap();

        assert_eq!(config.effective_fixture_extension(), "fixture");
        assert!(config.effective_keep_failed_staging());

        let subs = config.substitutions(Path::new("/suite"));
        assert_eq!(subs[0], ("%dir%".to_string(), "/suite".to_string()));
        assert_eq!(subs[1].0, "%bin%");
        assert_eq!(subs[2].0, "%vendor%");
    }

    #[test]
    fn test_relative_base_dir_expands_to_absolute() {
        let subs = HarnessConfig::default().substitutions(Path::new("rel/suite"));
        let expanded = Path::new(&subs[0].1);
        assert!(expanded.is_absolute(), "{}", expanded.display());
        assert_eq!(
            expanded,
            std::env::current_dir().unwrap().join("rel/suite")
        );
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = HarnessConfig::from_toml("keep_failed_staging = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }
}
