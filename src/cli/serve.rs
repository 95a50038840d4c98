//! Run the HTTP endpoint for the browser front end

use anyhow::Result;
use std::path::Path;
use tracing::info;

use terra::server::{self, AppState};

use super::load_config;

pub fn serve_command(config_override: Option<&Path>, port: Option<u16>) -> Result<()> {
    let config = load_config(config_override)?;
    let state = AppState::from_config(&config)?;

    match state.dispatcher.as_ref() {
        Some(dispatcher) => info!("[terra:http] Dispatching commands to {}", dispatcher.url()),
        None => info!("[terra:http] No backend configured; commands are classified only"),
    }

    let port = port.unwrap_or(config.server.port);
    let listener = server::bind(&config.server.host, port)?;
    server::run(listener, &state);

    Ok(())
}
