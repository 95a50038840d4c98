//! Diagnostic events emitted while classifying
//!
//! Observers are optional: classification results never depend on them.

use crate::Category;

/// One step of a classification, reported to a [`ClassifierObserver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Raw input after normalization
    Normalized { text: String },
    /// Wake word required but not found
    WakeWordAbsent,
    /// Wake word removed; `remainder` is what gets classified
    WakeWordStripped { remainder: String },
    /// Wake word found with nothing after it
    EmptyCommand,
    GreetingDetected { stem: String },
    PatternMatched {
        category: Category,
        phrase: String,
        candidate: String,
        distance: usize,
    },
    /// Nothing in the table matched
    NoMatch { text: String },
}

impl std::fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticEvent::Normalized { text } => write!(f, "normalized: '{}'", text),
            DiagnosticEvent::WakeWordAbsent => write!(f, "wake word absent"),
            DiagnosticEvent::WakeWordStripped { remainder } => {
                write!(f, "wake word stripped: '{}'", remainder)
            }
            DiagnosticEvent::EmptyCommand => write!(f, "wake word without command"),
            DiagnosticEvent::GreetingDetected { stem } => write!(f, "greeting: '{}'", stem),
            DiagnosticEvent::PatternMatched {
                category,
                phrase,
                candidate,
                distance,
            } => write!(
                f,
                "matched {} via '{}' on '{}' (distance {})",
                category, phrase, candidate, distance
            ),
            DiagnosticEvent::NoMatch { text } => write!(f, "no match for '{}'", text),
        }
    }
}

/// Receives diagnostic events from a classifier
pub trait ClassifierObserver: Send + Sync {
    fn observe(&self, event: &DiagnosticEvent);
}

impl<F> ClassifierObserver for F
where
    F: Fn(&DiagnosticEvent) + Send + Sync,
{
    fn observe(&self, event: &DiagnosticEvent) {
        self(event)
    }
}

/// Default observer: forwards events to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ClassifierObserver for TracingObserver {
    fn observe(&self, event: &DiagnosticEvent) {
        match event {
            DiagnosticEvent::PatternMatched {
                category, distance, ..
            } => tracing::debug!(
                category = %category,
                distance = *distance,
                "[terra:classify] {}",
                event
            ),
            _ => tracing::debug!("[terra:classify] {}", event),
        }
    }
}

/// Observer that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl ClassifierObserver for SilentObserver {
    fn observe(&self, _event: &DiagnosticEvent) {}
}
