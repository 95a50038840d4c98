//! Wake word settings

use serde::{Deserialize, Serialize};

/// Wake word that must prefix a spoken command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WakeWordSettings {
    /// Literal wake words, matched case-insensitively anywhere in the utterance.
    /// Every occurrence is removed before classification.
    #[serde(default = "default_wake_words")]
    pub words: Vec<String>,

    /// Whether utterances without a wake word are ignored.
    /// Set to false for manual text entry, where every line is a command.
    #[serde(default = "default_wake_word_required")]
    pub required: bool,
}

fn default_wake_words() -> Vec<String> {
    vec!["терра".to_string(), "terra".to_string()]
}

fn default_wake_word_required() -> bool {
    true
}

impl Default for WakeWordSettings {
    fn default() -> Self {
        Self {
            words: default_wake_words(),
            required: default_wake_word_required(),
        }
    }
}
