//! Init command implementation

use anyhow::{bail, Result};
use std::path::Path;

use terra::Config;

use super::resolve_config_path;

pub fn init_command(config_override: Option<&Path>, force: bool) -> Result<()> {
    let config_path = resolve_config_path(config_override);

    if !Config::init_file(&config_path, force)? {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    println!("Created: {}", config_path.display());
    Ok(())
}
