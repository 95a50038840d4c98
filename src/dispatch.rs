//! Forwarding classified commands to the execution backend
//!
//! Terra never executes commands itself. Business categories are POSTed as
//! JSON to the configured backend; greetings, unknown input and wake word
//! prompts are answered locally and never leave the process.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::BackendSettings;
use crate::{Category, Classification, Interpretation};

/// Body sent to the backend for every dispatched command
#[derive(Debug, Clone, Serialize)]
pub struct DispatchRequest<'a> {
    pub id: Uuid,
    /// Utterance as transcribed
    pub text: &'a str,
    pub command_type: Category,
    /// Words after the matched phrase (task description, search query)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<&'a str>,
    pub received_at: DateTime<Utc>,
}

impl<'a> DispatchRequest<'a> {
    pub fn new(text: &'a str, command_type: Category) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            command_type,
            argument: None,
            received_at: Utc::now(),
        }
    }

    pub fn with_argument(mut self, argument: Option<&'a str>) -> Self {
        self.argument = argument;
        self
    }
}

/// What the backend answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub request_id: Uuid,
    pub status: u16,
    /// Optional `result` string from the backend's JSON reply
    pub result: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct BackendReply {
    #[serde(default)]
    result: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("'{0}' is not a backend command")]
    NotActionable(Classification),

    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to reach backend: {0}")]
    Transport(String),
}

/// HTTP client for the command backend
#[derive(Clone)]
pub struct Dispatcher {
    url: String,
    token: Option<String>,
    client: ureq::Agent,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Dispatcher {
    pub fn new(settings: &BackendSettings) -> Self {
        let client = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build();

        Self {
            url: settings.url.clone(),
            token: settings
                .token
                .clone()
                .filter(|t| !t.trim().is_empty()),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send a classified utterance to the backend.
    ///
    /// Only business categories are sent; anything else is `NotActionable`.
    pub fn dispatch(
        &self,
        text: &str,
        interpretation: &Interpretation,
    ) -> Result<DispatchOutcome, DispatchError> {
        let classification = interpretation.classification;
        let category = classification
            .category()
            .filter(|c| c.is_actionable())
            .ok_or(DispatchError::NotActionable(classification))?;

        let request =
            DispatchRequest::new(text, category).with_argument(interpretation.argument());
        let mut call = self.client.post(&self.url);
        if let Some(ref token) = self.token {
            call = call.set("Authorization", &format!("Bearer {}", token));
        }

        match call.send_json(&request) {
            Ok(response) => {
                let status = response.status();
                // Backends may answer with an empty body or non-JSON acknowledgement
                let reply: BackendReply = match response.into_json() {
                    Ok(reply) => reply,
                    Err(e) => {
                        tracing::debug!("[terra:dispatch] Ignoring non-JSON reply body: {}", e);
                        BackendReply::default()
                    }
                };
                tracing::info!(
                    "[terra:dispatch] {} -> {} (HTTP {})",
                    category,
                    self.url,
                    status
                );
                Ok(DispatchOutcome {
                    request_id: request.id,
                    status,
                    result: reply.result,
                })
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                tracing::warn!("[terra:dispatch] Backend rejected {}: HTTP {}", category, status);
                Err(DispatchError::Status { status, body })
            }
            Err(e) => {
                tracing::error!("[terra:dispatch] Failed to reach {}: {}", self.url, e);
                Err(DispatchError::Transport(e.to_string()))
            }
        }
    }
}
