//! Structured-config service for CONFIG sections.
//!
//! Fixtures declare analyzer configuration as YAML; the harness keeps it as a
//! JSON mapping and writes it back out as JSON (a YAML subset) when staging.

use fixtest_core::errors::ConfigTextError;
use serde_json::Value;

use crate::fixture::ConfigMap;

/// Parses a block of configuration text into a nested mapping.
pub trait ConfigService {
    fn parse(&self, text: &str) -> Result<ConfigMap, ConfigTextError>;
}

/// Default service backed by `serde_yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlConfigService;

impl ConfigService for YamlConfigService {
    fn parse(&self, text: &str) -> Result<ConfigMap, ConfigTextError> {
        if text.trim().is_empty() {
            return Ok(ConfigMap::new());
        }

        let value: Value = serde_yaml::from_str(text).map_err(|e| ConfigTextError::Syntax {
            message: e.to_string(),
        })?;

        match value {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(ConfigMap::new()),
            other => Err(ConfigTextError::NotAMapping {
                found: json_kind(&other).to_string(),
            }),
        }
    }
}

/// Serialize a config mapping for the staged analyzer config file.
pub fn render_config(config: &ConfigMap) -> String {
    // Map<String, Value> serialization cannot fail.
    serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string())
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_mapping() {
        let config = YamlConfigService
            .parse("tools:\n  php_analyzer:\n    enabled: true\n    paths: [src, lib]\n")
            .unwrap();
        assert_eq!(
            Value::Object(config),
            json!({"tools": {"php_analyzer": {"enabled": true, "paths": ["src", "lib"]}}})
        );
    }

    #[test]
    fn test_empty_and_null_documents() {
        assert!(YamlConfigService.parse("").unwrap().is_empty());
        assert!(YamlConfigService.parse("  \n").unwrap().is_empty());
        assert!(YamlConfigService.parse("~").unwrap().is_empty());
    }

    #[test]
    fn test_scalar_document_is_rejected() {
        let err = YamlConfigService.parse("just a string").unwrap_err();
        assert_eq!(
            err,
            ConfigTextError::NotAMapping {
                found: "string".to_string()
            }
        );
    }

    #[test]
    fn test_syntax_error() {
        let err = YamlConfigService.parse("tools: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigTextError::Syntax { .. }));
    }

    #[test]
    fn test_render_config_is_json() {
        let config = YamlConfigService.parse("a: 1\nb: [x]\n").unwrap();
        assert_eq!(render_config(&config), r#"{"a":1,"b":["x"]}"#);
    }
}
