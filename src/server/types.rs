//! Request/response bodies and shared server state

use serde::{Deserialize, Serialize};

use crate::classifier::CommandClassifier;
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::responses::Responses;

/// Everything a request handler needs
#[derive(Debug)]
pub struct AppState {
    pub classifier: CommandClassifier,
    pub responses: Responses,
    pub dispatcher: Option<Dispatcher>,
    /// Required `X-Terra-Token` value; `None` disables auth
    pub token: Option<String>,
}

impl AppState {
    pub fn new(classifier: CommandClassifier) -> Self {
        Self {
            classifier,
            responses: Responses::new(),
            dispatcher: None,
            token: None,
        }
    }

    /// Build state from config: classifier, optional backend and token
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let classifier = CommandClassifier::from_config(config)?;
        let mut state = Self::new(classifier);
        state.dispatcher = config.backend.as_ref().map(Dispatcher::new);
        state.token = Some(config.server.token.clone()).filter(|t| !t.trim().is_empty());
        Ok(state)
    }
}

/// Body of `POST /process_command`
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessCommandRequest {
    pub text: Option<String>,
}

/// Reply to `POST /process_command`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessCommandResponse {
    /// "success" or "error"
    pub status: String,
    /// Classification label, e.g. "task_creation", "empty_command"
    pub command_type: String,
    /// Words after the matched phrase, e.g. the task description or search query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
    /// Text to show or speak to the user
    pub result: String,
    /// Whether the command was forwarded to the backend
    #[serde(default)]
    pub dispatched: bool,
}
