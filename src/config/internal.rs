//! Internal default pattern table embedded at compile-time
//!
//! This module embeds the built-in categories and phrases from
//! `assets/internal/defaults.toml` and provides versioned merging
//! into user configurations.

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::CategoryPatterns;

/// Embedded defaults TOML content (compile-time)
pub const INTERNAL_DEFAULTS_TOML: &str = include_str!("../../assets/internal/defaults.toml");

static INTERNAL_DEFAULTS: Lazy<Result<InternalDefaults, String>> =
    Lazy::new(|| toml::from_str(INTERNAL_DEFAULTS_TOML).map_err(|e| e.to_string()));

/// Internal defaults structure matching the TOML format
#[derive(Debug, Clone, Deserialize)]
pub struct InternalDefaults {
    #[serde(default)]
    pub category: Vec<CategoryPatterns>,
}

impl InternalDefaults {
    /// Parse the embedded defaults TOML
    pub fn load() -> Result<Self, toml::de::Error> {
        toml::from_str(INTERNAL_DEFAULTS_TOML)
    }

    /// Parsed defaults, cached for the lifetime of the process
    pub fn cached() -> Result<&'static Self, String> {
        INTERNAL_DEFAULTS.as_ref().map_err(Clone::clone)
    }

    /// Merge internal categories into a user table, respecting versions.
    ///
    /// For each internal category:
    /// - If it doesn't exist in the target table, append it
    /// - If it exists but the internal version is higher, replace its phrases in place
    /// - If it exists with same or higher version, keep the user's phrases
    ///
    /// Returns true if the table changed.
    pub fn merge_into(&self, categories: &mut Vec<CategoryPatterns>) -> bool {
        let mut changed = false;

        for internal in &self.category {
            match categories.iter_mut().find(|c| c.name == internal.name) {
                Some(existing) if existing.version >= internal.version => {
                    // User has same or newer version, keep it
                }
                Some(existing) => {
                    *existing = internal.clone();
                    changed = true;
                }
                None => {
                    categories.push(internal.clone());
                    changed = true;
                }
            }
        }

        changed
    }
}
