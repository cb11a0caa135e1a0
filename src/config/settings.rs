//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::select::MalformedPolicy;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Selection settings.
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selection.prefix.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "selection.prefix must not be empty".to_string(),
            });
        }
        if self.selection.lower > self.selection.upper {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "selection range is inverted: lower bound {} exceeds upper bound {}",
                    self.selection.lower, self.selection.upper
                ),
            });
        }
        Ok(())
    }
}

/// Selection configuration: which references to select and how to treat
/// malformed ones.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionConfig {
    /// Reference designator prefix to match.
    /// Default: "SW"
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Inclusive lower bound for the numeric suffix.
    /// Default: 33
    #[serde(default = "default_lower")]
    pub lower: u32,

    /// Inclusive upper bound for the numeric suffix.
    /// Default: 62
    #[serde(default = "default_upper")]
    pub upper: u32,

    /// Policy for a matching prefix with a non-numeric suffix:
    /// "abort" or "skip". Default: "abort"
    #[serde(default)]
    pub on_malformed: MalformedPolicy,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            lower: default_lower(),
            upper: default_upper(),
            on_malformed: MalformedPolicy::default(),
        }
    }
}

fn default_prefix() -> String {
    "SW".to_string()
}

const fn default_lower() -> u32 {
    33
}

const fn default_upper() -> u32 {
    62
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let json = r"{}";
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.selection.prefix, "SW");
        assert_eq!(config.selection.lower, 33);
        assert_eq!(config.selection.upper, 62);
        assert_eq!(config.selection.on_malformed, MalformedPolicy::Abort);
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "_comment": "Test config",
            "selection": {
                "prefix": "LED",
                "lower": 1,
                "upper": 8,
                "on_malformed": "skip"
            },
            "logging": {
                "level": "debug"
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.selection.prefix, "LED");
        assert_eq!(config.selection.lower, 1);
        assert_eq!(config.selection.upper, 8);
        assert_eq!(config.selection.on_malformed, MalformedPolicy::Skip);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn selection_config_defaults() {
        let config = SelectionConfig::default();
        assert_eq!(config.prefix, "SW");
        assert_eq!(config.lower, 33);
        assert_eq!(config.upper, 62);
        assert_eq!(config.on_malformed, MalformedPolicy::Abort);
    }

    #[test]
    fn logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn reject_empty_prefix() {
        let json = r#"{ "selection": { "prefix": "" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_inverted_range() {
        let json = r#"{ "selection": { "lower": 62, "upper": 33 } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_unknown_policy() {
        let json = r#"{ "selection": { "on_malformed": "retry" } }"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn reject_unknown_fields() {
        let json = r#"{ "unknown_field": "value" }"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
