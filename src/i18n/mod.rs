//! Internationalization for the profile page.
//!
//! Strings live in embedded `.ftl` files using a plain `key = value` subset.
//! The active table is owned by a [`TranslationService`] that the app passes
//! down to the view.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en", alias = "en-US")]
    English,
    #[serde(rename = "ja", alias = "ja-JP")]
    Japanese,
}

impl Language {
    /// Get the language identifier string.
    pub fn id(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Japanese => "ja",
        }
    }

    /// Parse from a locale identifier such as `ja-JP` or `en_GB.UTF-8`.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.to_lowercase();
        if id.starts_with("ja") {
            Some(Language::Japanese)
        } else if id.starts_with("en") {
            Some(Language::English)
        } else {
            None
        }
    }

    /// Whether rendering needs a CJK font.
    pub fn needs_cjk_font(&self) -> bool {
        matches!(self, Language::Japanese)
    }

    fn ftl_content(&self) -> &'static str {
        match self {
            Language::English => include_str!("locales/en-US/main.ftl"),
            Language::Japanese => include_str!("locales/ja/main.ftl"),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Japanese => write!(f, "日本語"),
        }
    }
}

/// Detect the system locale and return the best matching language.
pub fn detect_system_locale() -> Language {
    sys_locale::get_locale()
        .and_then(|locale| Language::from_id(&locale))
        .unwrap_or_default()
}

/// Language to render in, given whether a CJK font could be installed.
///
/// Japanese without a CJK font falls back to English.
pub fn pick_language(requested: Language, cjk_font_found: bool) -> Language {
    if requested.needs_cjk_font() && !cjk_font_found {
        Language::English
    } else {
        requested
    }
}

/// Translation table for one active language, with English fallback.
#[derive(Debug, Clone)]
pub struct TranslationService {
    language: Language,
    active: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl TranslationService {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            active: parse_ftl(language.ftl_content()),
            fallback: parse_ftl(Language::English.ftl_content()),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate a key. Missing keys fall back to English, then to the key.
    pub fn t(&self, key: &str) -> String {
        self.active
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
            .unwrap_or_else(|| {
                tracing::debug!("Missing translation for {}", key);
                key.to_string()
            })
    }
}

impl Default for TranslationService {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

fn parse_ftl(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}
