//! Configuration loading and management

mod error;
mod internal;
mod io;
mod settings;

pub use error::ConfigError;
pub use internal::InternalDefaults;
pub use settings::{
    BackendSettings, GreetingCheck, GreetingSettings, MatchSettings, ServerSettings,
    WakeWordSettings,
};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Category;

/// Highest config schema version this build understands
pub const CONFIG_VERSION: u32 = 1;

/// Trigger phrases for one category, as stored in `[[category]]` tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPatterns {
    pub name: Category,

    /// Version of this entry; internal defaults only replace lower versions
    #[serde(default = "default_category_version")]
    pub version: u32,

    pub phrases: Vec<String>,
}

fn default_category_version() -> u32 {
    1
}

impl CategoryPatterns {
    pub fn new<I, S>(name: Category, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            version: default_category_version(),
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }
}

/// Main configuration structure
///
/// The `[[category]]` array is ordered: categories declared earlier win
/// when several could match the same utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_config_version")]
    pub version: u32,

    /// Append missing built-in categories (and upgrade outdated ones) on load.
    /// Turn off to keep a reduced pattern table exactly as written.
    #[serde(default = "default_merge_builtin_categories")]
    pub merge_builtin_categories: bool,

    #[serde(default)]
    pub wake_word: WakeWordSettings,

    #[serde(default)]
    pub greeting: GreetingSettings,

    #[serde(default)]
    pub matching: MatchSettings,

    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendSettings>,

    #[serde(default)]
    pub category: Vec<CategoryPatterns>,
}

fn default_config_version() -> u32 {
    CONFIG_VERSION
}

fn default_merge_builtin_categories() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            merge_builtin_categories: default_merge_builtin_categories(),
            wake_word: WakeWordSettings::default(),
            greeting: GreetingSettings::default(),
            matching: MatchSettings::default(),
            server: ServerSettings::default(),
            backend: None,
            category: Vec::new(),
        }
    }
}

impl Config {
    /// Create a config with the built-in pattern table.
    pub fn with_defaults() -> Self {
        let mut config = Self::default();
        config.merge_internal_defaults();
        config
    }

    /// Create a config with the default settings and a custom pattern table.
    pub fn with_categories(categories: Vec<CategoryPatterns>) -> Self {
        Self {
            category: categories,
            ..Self::default()
        }
    }

    /// Merge the embedded categories into this config.
    ///
    /// Returns true if anything was added or upgraded.
    pub fn merge_internal_defaults(&mut self) -> bool {
        match InternalDefaults::cached() {
            Ok(defaults) => defaults.merge_into(&mut self.category),
            Err(e) => {
                tracing::warn!("Failed to load internal defaults: {}", e);
                false
            }
        }
    }

    /// Check everything the classifier relies on.
    ///
    /// Wake word and pattern table checks are repeated when the classifier is
    /// built; this catches them before a config is written to disk.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: CONFIG_VERSION,
            });
        }

        let tolerance = self.matching.tolerance;
        if !tolerance.is_finite() || !(0.0..=1.0).contains(&tolerance) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }

        if self.wake_word.words.iter().all(|w| w.trim().is_empty()) {
            return Err(ConfigError::NoWakeWords);
        }

        if self.category.is_empty() {
            return Err(ConfigError::EmptyTable);
        }

        let mut seen = HashSet::new();
        for entry in &self.category {
            if entry.name == Category::Unknown {
                return Err(ConfigError::UnknownInTable);
            }
            if !seen.insert(entry.name) {
                return Err(ConfigError::DuplicateCategory(entry.name));
            }
            if entry.phrases.is_empty() {
                return Err(ConfigError::NoPhrases(entry.name));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults_is_valid() {
        let config = Config::with_defaults();
        config.validate().unwrap();
        assert_eq!(config.category.len(), Category::ALL.len() - 1);
    }

    #[test]
    fn test_default_has_empty_table() {
        let config = Config::default();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyTable)));
    }

    #[test]
    fn test_validate_rejects_unknown_category() {
        let config = Config::with_categories(vec![CategoryPatterns::new(
            Category::Unknown,
            ["что угодно"],
        )]);
        assert!(matches!(config.validate(), Err(ConfigError::UnknownInTable)));
    }

    #[test]
    fn test_validate_rejects_duplicates_and_empty_phrases() {
        let config = Config::with_categories(vec![
            CategoryPatterns::new(Category::Search, ["найти"]),
            CategoryPatterns::new(Category::Search, ["поиск"]),
        ]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateCategory(Category::Search))
        ));

        let empty: [&str; 0] = [];
        let config = Config::with_categories(vec![CategoryPatterns::new(Category::Risk, empty)]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoPhrases(Category::Risk))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_tolerance_and_version() {
        let mut config = Config::with_defaults();
        config.matching.tolerance = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTolerance(_))
        ));

        let mut config = Config::with_defaults();
        config.version = CONFIG_VERSION + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_missing_wake_words() {
        let mut config = Config::with_defaults();
        config.wake_word.words = vec![" ".to_string()];
        assert!(matches!(config.validate(), Err(ConfigError::NoWakeWords)));
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: Config = toml::from_str(
            r#"
[wake_word]
words = ["ассистент"]
required = false

[greeting]
check = "before_wake_word"

[[category]]
name = "search"
phrases = ["найти", "поиск"]

[[category]]
name = "finance"
phrases = ["счет"]
"#,
        )
        .unwrap();

        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.wake_word.words, vec!["ассистент".to_string()]);
        assert!(!config.wake_word.required);
        assert_eq!(config.greeting.check, GreetingCheck::BeforeWakeWord);
        assert!(!config.greeting.stems.is_empty());
        assert_eq!(config.matching, MatchSettings::default());
        assert_eq!(config.category[0].name, Category::Search);
        assert_eq!(config.category[1].version, 1);
        config.validate().unwrap();
    }
}
