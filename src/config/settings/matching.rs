//! Fuzzy phrase matching settings

use serde::{Deserialize, Serialize};

/// Tuning for approximate phrase comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Strings shorter than this (in characters) must match exactly
    #[serde(default = "default_min_fuzzy_len")]
    pub min_fuzzy_len: usize,

    /// Allowed edit distance as a fraction of the longer string's length
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Also compare each phrase against same-length word windows of the utterance,
    /// so "создать задачу по отчету" still hits "создать задачу"
    #[serde(default = "default_window_scan")]
    pub window_scan: bool,
}

fn default_min_fuzzy_len() -> usize {
    4
}

fn default_tolerance() -> f64 {
    0.3 // absorbs dropped/substituted characters from speech recognition
}

fn default_window_scan() -> bool {
    true
}

impl MatchSettings {
    /// Largest edit distance accepted between strings whose longer side has `max_len` chars
    pub fn max_distance(&self, max_len: usize) -> usize {
        (max_len as f64 * self.tolerance).floor() as usize
    }
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            min_fuzzy_len: default_min_fuzzy_len(),
            tolerance: default_tolerance(),
            window_scan: default_window_scan(),
        }
    }
}
