//! Wake word detection and removal

use regex::Regex;

use super::normalize::normalize;
use crate::config::ConfigError;

/// Punctuation recognizers tend to put around the wake word ("Терра, ...")
const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Removes every occurrence of the configured wake words from an utterance
#[derive(Debug, Clone)]
pub struct WakeWordStripper {
    words: Vec<String>,
    pattern: Regex,
}

/// Result of stripping the wake word from normalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WakeWordStrip {
    /// At least one wake word occurrence was removed
    pub found: bool,
    /// What is left, whitespace collapsed and edge punctuation trimmed
    pub remainder: String,
}

impl WakeWordStrip {
    /// Wake word heard, but no command after it
    pub fn is_empty_command(&self) -> bool {
        self.found && self.remainder.is_empty()
    }
}

impl WakeWordStripper {
    /// Build a stripper matching any of `words`, case-insensitively.
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, ConfigError> {
        let mut normalized: Vec<String> = words
            .iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        if normalized.is_empty() {
            return Err(ConfigError::NoWakeWords);
        }

        normalized.dedup();
        // Longest first so "terra" never shadows "terrabot"
        let mut alternatives = normalized.clone();
        alternatives.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));

        let body = alternatives
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("(?i)(?:{})", body))
            .map_err(|e| ConfigError::InvalidWakeWord(e.to_string()))?;

        Ok(Self {
            words: normalized,
            pattern,
        })
    }

    /// Configured wake words, normalized
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Whether `text` contains a wake word anywhere
    pub fn contains(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Remove every wake word occurrence from `text`.
    pub fn strip(&self, text: &str) -> WakeWordStrip {
        let found = self.pattern.is_match(text);
        let removed = if found {
            self.pattern.replace_all(text, " ")
        } else {
            std::borrow::Cow::Borrowed(text)
        };

        let collapsed = removed.split_whitespace().collect::<Vec<_>>().join(" ");
        let remainder = collapsed
            .trim_matches(|c: char| c.is_whitespace() || EDGE_PUNCTUATION.contains(&c))
            .to_string();

        WakeWordStrip { found, remainder }
    }
}
