//! HTTP endpoint and backend dispatch settings

use serde::{Deserialize, Serialize};

/// Local HTTP endpoint used by the browser front end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    /// Default: 5000
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared secret required on requests (sent as `X-Terra-Token`).
    ///
    /// If empty, the server accepts unauthenticated requests.
    #[serde(default)]
    pub token: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            token: String::new(),
        }
    }
}

/// External backend that executes classified commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Endpoint receiving `POST` requests with the classified command
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional bearer token sent in the `Authorization` header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_timeout_secs() -> u64 {
    10
}
