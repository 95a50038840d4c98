//! TERRA - wake-word command classifier
//!
//! Turns a transcribed utterance into one of a fixed set of business command
//! categories. An utterance must start with the wake word ("терра"); what
//! follows is checked for a greeting and then matched against an ordered
//! table of pattern phrases with edit-distance tolerance for recognition
//! errors.
//!
//! ## Surfaces
//!
//! 1. **Library**: [`CommandClassifier::classify`] is a pure function of the
//!    loaded configuration and the input text.
//!
//! 2. **HTTP**: `terra serve` answers `POST /process_command` for the browser
//!    front end and optionally forwards business commands to a backend.

pub mod classifier;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod responses;
pub mod server;

pub use classifier::CommandClassifier;
pub use config::{CategoryPatterns, Config};
pub use domain::*;
