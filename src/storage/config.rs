//! Application configuration.
//!
//! Loaded once from `config.toml` in the platform config directory. Every
//! section is optional; missing keys take their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::i18n::Language;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// UI settings
    pub ui: UiSettings,
    /// Contact link targets
    pub links: LinkSettings,
}

/// UI-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Display language; the system locale decides when unset
    pub language: Option<Language>,
    /// Font scale multiplier
    pub font_scale: f32,
    /// Skip entrance and skill bar animations
    pub reduce_motion: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            language: None,
            font_scale: 1.0,
            reduce_motion: false,
        }
    }
}

/// Targets of the contact panel links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSettings {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            github: "https://github.com/yourusername".to_string(),
            linkedin: "https://linkedin.com/in/yourusername".to_string(),
            twitter: "https://twitter.com/yourusername".to_string(),
        }
    }
}

/// Get the application config directory, if the platform has one.
pub fn get_config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "portfolio", "Portfolio")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the configuration file path.
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the preference store path.
pub fn get_preferences_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("preferences.toml"))
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    if !(0.5..=3.0).contains(&config.ui.font_scale) {
        return Err(ConfigError::InvalidValue(format!(
            "font_scale {} is outside 0.5-3.0",
            config.ui.font_scale
        )));
    }

    Ok(config)
}

/// Load configuration from a file. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    parse_config(&content)
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(AppConfig::default()),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.links.github, "https://github.com/yourusername");
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(
            r#"
            [ui]
            language = "ja"
            reduce_motion = true

            [links]
            github = "https://github.com/taro"
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.language, Some(Language::Japanese));
        assert!(config.ui.reduce_motion);
        assert_eq!(config.ui.font_scale, 1.0);
        assert_eq!(config.links.github, "https://github.com/taro");
        assert_eq!(config.links.twitter, "https://twitter.com/yourusername");
    }

    #[test]
    fn test_rejects_bad_font_scale() {
        let err = parse_config("[ui]\nfont_scale = 9.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_rejects_malformed() {
        let err = parse_config("[ui\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
