//! Greeting detection settings

use serde::{Deserialize, Serialize};

/// When the greeting check runs relative to wake word stripping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreetingCheck {
    /// Check the text left after a successful wake word strip
    #[default]
    AfterWakeWord,
    /// Check the raw utterance first; greetings then work without the wake word
    BeforeWakeWord,
}

/// Greeting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingSettings {
    /// Stems an utterance may start with to count as a greeting
    #[serde(default = "default_greeting_stems")]
    pub stems: Vec<String>,

    #[serde(default)]
    pub check: GreetingCheck,
}

fn default_greeting_stems() -> Vec<String> {
    ["привет", "здравствуй", "добр", "хай", "hello"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for GreetingSettings {
    fn default() -> Self {
        Self {
            stems: default_greeting_stems(),
            check: GreetingCheck::default(),
        }
    }
}
