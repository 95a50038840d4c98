//! CLI command implementations

pub mod categories;
pub mod classify;
pub mod init;
pub mod serve;

use std::path::{Path, PathBuf};

use anyhow::Result;
use terra::Config;

/// Resolve the config path - uses global config (~/.terra/config.toml) as default,
/// but allows override via --config flag.
pub fn resolve_config_path(config_override: Option<&Path>) -> PathBuf {
    match config_override {
        Some(p) => p.to_path_buf(),
        None => Config::global_config_path(),
    }
}

/// Load the config, creating it with defaults on first run.
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    match config_override {
        None => Config::load(),
        Some(path) => Config::load_or_init(path),
    }
}
