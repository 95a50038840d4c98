//! Approximate phrase matching against the category pattern table
//!
//! Phrases are compared in a reduced charset (letters, digits, whitespace).
//! Short strings must match exactly; longer ones may differ by a fraction of
//! their length in Levenshtein distance, which absorbs the dropped and
//! substituted characters typical of speech recognition.

use std::collections::HashSet;

use super::normalize::comparison_form;
use crate::config::{CategoryPatterns, ConfigError, MatchSettings};
use crate::Category;

/// Levenshtein edit distance over characters (insert, delete, substitute cost 1)
pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Approximate equality with the default settings.
///
/// Both sides are reduced to the comparison charset first. If either is
/// shorter than 4 characters they must be equal; otherwise their distance may
/// be at most `floor(0.3 * longer length)`.
pub fn compare_approx(a: &str, b: &str) -> bool {
    MatchSettings::default().compare(a, b)
}

impl MatchSettings {
    /// Approximate equality of two raw strings under these settings
    pub fn compare(&self, a: &str, b: &str) -> bool {
        self.accepts(&comparison_form(a), &comparison_form(b)).is_some()
    }

    /// Distance between two strings already in comparison form, if close enough.
    fn accepts(&self, a: &str, b: &str) -> Option<usize> {
        let len_a = a.chars().count();
        let len_b = b.chars().count();

        if len_a < self.min_fuzzy_len || len_b < self.min_fuzzy_len {
            return (a == b).then_some(0);
        }

        let distance = levenshtein(a, b);
        (distance <= self.max_distance(len_a.max(len_b))).then_some(distance)
    }
}

#[derive(Debug, Clone)]
struct Phrase {
    text: String,
    /// Comparison form with whitespace collapsed
    key: String,
    words: usize,
}

#[derive(Debug, Clone)]
struct TableEntry {
    category: Category,
    phrases: Vec<Phrase>,
}

/// A phrase that matched an utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch<'a> {
    pub category: Category,
    /// The configured phrase, as written
    pub phrase: &'a str,
    /// The part of the utterance it was compared against
    pub candidate: String,
    pub distance: usize,
    /// Words following the matched window ("по отчету" in "создать задачу по отчету").
    /// Empty when the whole utterance matched.
    pub argument: String,
}

/// Ordered category → phrases table. Earlier categories win ties.
#[derive(Debug, Clone)]
pub struct PatternTable {
    entries: Vec<TableEntry>,
}

impl PatternTable {
    /// Build a table, rejecting anything the matcher can't rely on:
    /// an empty table, `unknown`, duplicate categories, or categories without usable phrases.
    pub fn new(categories: &[CategoryPatterns]) -> Result<Self, ConfigError> {
        if categories.is_empty() {
            return Err(ConfigError::EmptyTable);
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(categories.len());

        for entry in categories {
            if entry.name == Category::Unknown {
                return Err(ConfigError::UnknownInTable);
            }
            if !seen.insert(entry.name) {
                return Err(ConfigError::DuplicateCategory(entry.name));
            }
            if entry.phrases.is_empty() {
                return Err(ConfigError::NoPhrases(entry.name));
            }

            let phrases = entry
                .phrases
                .iter()
                .map(|text| {
                    let key = collapse(&comparison_form(text));
                    if key.is_empty() {
                        return Err(ConfigError::BlankPhrase(entry.name));
                    }
                    let words = key.split(' ').count();
                    Ok(Phrase {
                        text: text.clone(),
                        key,
                        words,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            entries.push(TableEntry {
                category: entry.name,
                phrases,
            });
        }

        Ok(Self { entries })
    }

    /// Categories in priority order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|e| e.category)
    }

    /// Phrases configured for `category`, in declaration order
    pub fn phrases(&self, category: Category) -> Vec<&str> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.phrases.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First phrase (in table order) that approximately matches `text`.
    ///
    /// The whole utterance is compared against the entire table first. Only
    /// when nothing matches and `window_scan` is on, every run of consecutive
    /// words as long as a phrase is tried, again in table order.
    pub fn find_match(&self, text: &str, settings: &MatchSettings) -> Option<PatternMatch<'_>> {
        let whole = collapse(&comparison_form(text));
        if whole.is_empty() {
            return None;
        }

        for entry in &self.entries {
            for phrase in &entry.phrases {
                if let Some(distance) = settings.accepts(&whole, &phrase.key) {
                    return Some(PatternMatch {
                        category: entry.category,
                        phrase: &phrase.text,
                        candidate: whole,
                        distance,
                        argument: String::new(),
                    });
                }
            }
        }

        if !settings.window_scan {
            return None;
        }

        let words: Vec<&str> = whole.split(' ').collect();
        for entry in &self.entries {
            for phrase in entry.phrases.iter().filter(|p| p.words < words.len()) {
                for (start, window) in words.windows(phrase.words).enumerate() {
                    let candidate = window.join(" ");
                    if let Some(distance) = settings.accepts(&candidate, &phrase.key) {
                        return Some(PatternMatch {
                            category: entry.category,
                            phrase: &phrase.text,
                            candidate,
                            distance,
                            argument: words[start + phrase.words..].join(" "),
                        });
                    }
                }
            }
        }

        None
    }
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
