//! Route handlers. Pure functions of state and request so they can be tested
//! without a socket.

use serde_json::{json, Value};
use tracing::{info, warn};

use super::types::{AppState, ProcessCommandRequest, ProcessCommandResponse};

/// Route a request to its handler and return status code and JSON body
pub fn route(
    state: &AppState,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: &str,
) -> (u16, Value) {
    if !is_authorized(state.token.as_deref(), token) {
        return (401, json!({ "error": "unauthorized" }));
    }

    match (method, path) {
        ("GET", "/ping") => (
            200,
            json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }),
        ),
        ("POST", "/process_command") => handle_process_command(state, body),
        _ => (404, json!({ "error": "not_found" })),
    }
}

fn is_authorized(expected: Option<&str>, provided: Option<&str>) -> bool {
    let Some(expected) = expected.filter(|t| !t.trim().is_empty()) else {
        return true;
    };
    provided == Some(expected)
}

fn handle_process_command(state: &AppState, body: &str) -> (u16, Value) {
    let req: ProcessCommandRequest = match serde_json::from_str(body) {
        Ok(req) => req,
        Err(e) => {
            return (
                400,
                json!({ "error": "invalid_json", "details": e.to_string() }),
            );
        }
    };

    let Some(text) = req.text.filter(|t| !t.trim().is_empty()) else {
        return (400, json!({ "error": "no_text" }));
    };

    let interpretation = state.classifier.interpret(&text);
    let classification = interpretation.classification;
    info!("[terra:http] '{}' -> {}", text, classification);

    let mut response = ProcessCommandResponse {
        status: "success".to_string(),
        command_type: classification.label().to_string(),
        argument: interpretation.argument().map(str::to_string),
        result: state.responses.reply_to(&interpretation),
        dispatched: false,
    };

    let status = match state.dispatcher.as_ref() {
        Some(dispatcher) if classification.is_actionable() => {
            match dispatcher.dispatch(&text, &interpretation) {
                Ok(outcome) => {
                    response.dispatched = true;
                    if let Some(result) = outcome.result {
                        response.result = result;
                    }
                    200
                }
                Err(e) => {
                    warn!("[terra:http] Dispatch failed: {}", e);
                    response.status = "error".to_string();
                    response.result = format!("Возникла проблема при выполнении команды: {}", e);
                    502
                }
            }
        }
        _ => 200,
    };

    let value = serde_json::to_value(&response)
        .unwrap_or_else(|_| json!({ "error": "serialize" }));
    (status, value)
}
