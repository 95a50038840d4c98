//! Shared test utilities for config and classifier integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use terra::classifier::SilentObserver;
use terra::{CommandClassifier, Config};

/// Creates a temp dir holding `config.toml` with the given content
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Classifier over the built-in table with diagnostics discarded
pub fn default_classifier() -> CommandClassifier {
    CommandClassifier::with_defaults()
        .expect("Built-in defaults must be valid")
        .with_observer(SilentObserver)
}

/// Classifier for an arbitrary config, diagnostics discarded
pub fn classifier_for(config: &Config) -> CommandClassifier {
    CommandClassifier::from_config(config)
        .expect("Config should build a classifier")
        .with_observer(SilentObserver)
}
