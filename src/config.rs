//! Module configuration loaded from a TOML settings file
//!
//! Covers the handful of knobs the demo module exposes: the module prefix
//! used for key scoping, which language to load, and how high the counting
//! demo counts. An absent file means defaults; a present but broken file is
//! an error.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading the settings file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for a localized module.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct ModuleConfig {
    /// Module prefix used to scope language keys in the flat store
    pub prefix: String,
    /// Language loaded initially and used as fallback for missing keys
    pub default_language: String,
    /// Selected language; the default language when absent
    pub language: Option<String>,
    /// How high the counting demo counts; non-positive disables it
    pub count: i64,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            prefix: "demo".to_string(),
            default_language: "English".to_string(),
            language: None,
            count: 0,
        }
    }
}

impl ModuleConfig {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// The language to load, falling back to the default language
    pub fn active_language(&self) -> &str {
        self.language.as_deref().unwrap_or(&self.default_language)
    }

    /// The counting target, clamped to zero for nonsense settings
    pub fn effective_count(&self) -> u64 {
        self.count.max(0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ModuleConfig::default();
        assert_eq!(config.prefix, "demo");
        assert_eq!(config.active_language(), "English");
        assert_eq!(config.effective_count(), 0);
    }

    #[test]
    fn test_parse_full_config() {
        let config = ModuleConfig::from_str(
            r#"
prefix = "loc_demo"
default-language = "English"
language = "German"
count = 5
"#,
        )
        .expect("config parses");
        assert_eq!(config.prefix, "loc_demo");
        assert_eq!(config.active_language(), "German");
        assert_eq!(config.effective_count(), 5);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = ModuleConfig::from_str("count = 3\n").expect("config parses");
        assert_eq!(config.prefix, "demo");
        assert_eq!(config.active_language(), "English");
        assert_eq!(config.effective_count(), 3);
    }

    #[test]
    fn test_negative_count_is_clamped() {
        let config = ModuleConfig::from_str("count = -7\n").expect("config parses");
        assert_eq!(config.effective_count(), 0);
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = ModuleConfig::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
