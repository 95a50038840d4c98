//! Command classifier - wake word, greeting and category matching
//!
//! Classification runs in a fixed order:
//! 1. normalize the utterance (lowercase, "ё" → "е", whitespace)
//! 2. strip the wake word ("терра", "terra")
//! 3. check greeting stems
//! 4. match the remainder against the ordered pattern table
//!
//! Example:
//! - "Терра, создать задачу по отчету" -> task_creation
//! - "терра" -> empty command (prompt the user)
//! - "создать задачу" -> no wake word (ignored)

mod events;
mod greeting;
mod matcher;
mod normalize;
mod wake;

pub use events::{ClassifierObserver, DiagnosticEvent, SilentObserver, TracingObserver};
pub use greeting::GreetingDetector;
pub use matcher::{compare_approx, levenshtein, PatternMatch, PatternTable};
pub use normalize::{comparison_form, normalize};
pub use wake::{WakeWordStrip, WakeWordStripper};

use std::sync::Arc;

use crate::config::{Config, ConfigError, GreetingCheck, MatchSettings};
use crate::{Category, Classification, Interpretation};

/// Classifies raw utterances into command categories.
///
/// Immutable once built; share it across threads behind an `Arc`.
#[derive(Clone)]
pub struct CommandClassifier {
    wake: WakeWordStripper,
    wake_word_required: bool,
    greetings: GreetingDetector,
    greeting_check: GreetingCheck,
    table: PatternTable,
    matching: MatchSettings,
    observer: Arc<dyn ClassifierObserver>,
}

impl std::fmt::Debug for CommandClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandClassifier")
            .field("wake", &self.wake)
            .field("wake_word_required", &self.wake_word_required)
            .field("greetings", &self.greetings)
            .field("greeting_check", &self.greeting_check)
            .field("table", &self.table)
            .field("matching", &self.matching)
            .finish_non_exhaustive()
    }
}

impl CommandClassifier {
    /// Build a classifier from a validated config.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            wake: WakeWordStripper::new(&config.wake_word.words)?,
            wake_word_required: config.wake_word.required,
            greetings: GreetingDetector::new(&config.greeting.stems),
            greeting_check: config.greeting.check,
            table: PatternTable::new(&config.category)?,
            matching: config.matching,
            observer: Arc::new(TracingObserver),
        })
    }

    /// Classifier over the built-in pattern table and default settings
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::from_config(&Config::with_defaults())
    }

    /// Replace the diagnostics observer
    pub fn with_observer(mut self, observer: impl ClassifierObserver + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    pub fn wake_words(&self) -> &[String] {
        self.wake.words()
    }

    pub fn greeting_stems(&self) -> &[String] {
        self.greetings.stems()
    }

    /// Classify a raw utterance. Never fails: anything unrecognized is `unknown`.
    pub fn classify(&self, raw: &str) -> Classification {
        self.interpret(raw).classification
    }

    /// Classify a raw utterance and keep the words that followed the matched phrase.
    pub fn interpret(&self, raw: &str) -> Interpretation {
        let normalized = normalize(raw);
        self.emit(DiagnosticEvent::Normalized {
            text: normalized.clone(),
        });

        let strip = self.wake.strip(&normalized);

        // Greetings ahead of the wake word gate are answered even without it
        if self.greeting_check == GreetingCheck::BeforeWakeWord && self.is_greeting(&strip.remainder)
        {
            return Category::Greeting.into();
        }

        if strip.is_empty_command() {
            self.emit(DiagnosticEvent::EmptyCommand);
            return Classification::EmptyCommand.into();
        }
        if strip.found {
            self.emit(DiagnosticEvent::WakeWordStripped {
                remainder: strip.remainder.clone(),
            });
        } else if self.wake_word_required {
            self.emit(DiagnosticEvent::WakeWordAbsent);
            return Classification::WakeWordAbsent.into();
        }

        if strip.remainder.is_empty() {
            return Category::Unknown.into();
        }

        if self.greeting_check == GreetingCheck::AfterWakeWord && self.is_greeting(&strip.remainder)
        {
            return Category::Greeting.into();
        }

        self.match_remainder(&strip.remainder)
    }

    /// Match text that has already been normalized and stripped of the wake word.
    pub fn match_command(&self, text: &str) -> Category {
        self.match_remainder(text)
            .classification
            .category()
            .unwrap_or(Category::Unknown)
    }

    fn match_remainder(&self, text: &str) -> Interpretation {
        match self.table.find_match(text, &self.matching) {
            Some(m) => {
                self.emit(DiagnosticEvent::PatternMatched {
                    category: m.category,
                    phrase: m.phrase.to_string(),
                    candidate: m.candidate,
                    distance: m.distance,
                });
                Interpretation::new(m.category.into(), m.argument)
            }
            None => {
                self.emit(DiagnosticEvent::NoMatch {
                    text: text.to_string(),
                });
                Category::Unknown.into()
            }
        }
    }

    fn is_greeting(&self, text: &str) -> bool {
        match self.greetings.detect(text) {
            Some(stem) => {
                self.emit(DiagnosticEvent::GreetingDetected {
                    stem: stem.to_string(),
                });
                true
            }
            None => false,
        }
    }

    fn emit(&self, event: DiagnosticEvent) {
        self.observer.observe(&event);
    }
}
