//! Errors raised while building a classifier from configuration

use crate::Category;

/// Invalid classifier configuration. Raised at construction, never while classifying.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unsupported config version {found} (this build supports up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Pattern table is empty")]
    EmptyTable,

    #[error("Category '{0}' is declared more than once")]
    DuplicateCategory(Category),

    #[error("Category 'unknown' is the fallback and cannot carry phrases")]
    UnknownInTable,

    #[error("Category '{0}' has no trigger phrases")]
    NoPhrases(Category),

    #[error("Category '{0}' has a phrase with no letters or digits")]
    BlankPhrase(Category),

    #[error("No wake words configured")]
    NoWakeWords,

    #[error("Invalid wake word: {0}")]
    InvalidWakeWord(String),

    #[error("Match tolerance must be between 0.0 and 1.0, got {0}")]
    InvalidTolerance(f64),
}
